// src/scrape.rs
use scraper::Html;
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    config::options::{NextPage, ScrapeOptions},
    core::{html, net::Fetch},
    data::Quote,
    error::{ExtractionError, FetchError, Result},
    progress::Progress,
    specs::quotes,
};

/// Walk the listing from the base URL until a page has no next link.
///
/// Records keep page order, then document order within a page.
/// Any failure aborts the walk; nothing collected so far is returned.
pub fn collect_all(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Quote>> {
    let base = scrape.base_url();
    Url::parse(base).map_err(|source| FetchError::InvalidUrl { url: base.to_string(), source })?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(base);
    }

    let mut all = Vec::new();
    let mut url = base.to_string();
    let mut page_num = 1usize;

    loop {
        let doc = load_page(fetcher, &url)?;
        let found = quotes::extract_all(&doc, &url)?;
        info!(page = page_num, url = %url, records = found.len(), "page scraped");

        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page_num, &url, found.len());
        }
        all.extend(found);

        if !quotes::has_next(&doc) {
            debug!(page = page_num, "no next link; done");
            break;
        }
        if scrape.max_pages.is_some_and(|max| page_num >= max) {
            warn!(pages = page_num, "page limit reached before the last page");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Stopped after {page_num} pages (limit)"));
            }
            break;
        }

        page_num += 1;
        url = next_url(scrape, &doc, &url, page_num)?;
        debug!(page = page_num, url = %url, "following next page");
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(all.len());
    }
    Ok(all)
}

/// Fetch + lenient parse of one page.
pub fn load_page(fetcher: &dyn Fetch, url: &str) -> Result<Html> {
    let raw = fetcher.fetch(url)?;
    Ok(html::parse(&raw))
}

fn next_url(scrape: &ScrapeOptions, doc: &Html, current: &str, page_num: usize) -> Result<String> {
    match scrape.next_page {
        NextPage::Counter => Ok(scrape.page_url(page_num)),
        NextPage::FollowLink => {
            let unusable = || ExtractionError {
                url: current.to_string(),
                block: 0,
                missing: quotes::NEXT_LINK,
            };
            let href = quotes::next_href(doc).ok_or_else(unusable)?;
            let here = Url::parse(current)
                .map_err(|source| FetchError::InvalidUrl { url: current.to_string(), source })?;
            let next = here.join(href).map_err(|_| unusable())?;
            Ok(next.into())
        }
    }
}
