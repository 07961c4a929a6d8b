// src/specs/quotes.rs
//! Scraping *spec* for the quote listing.
//!
//! Page shape:
//! ```text
//! div.quote
//!   span.text       "“…”"
//!   small.author    "Albert Einstein"
//!   div.tags
//!     a.tag         "change"  (zero or more)
//! li.next > a       present on every page but the last
//! ```
//!
//! Pure HTML reading: no network, no I/O. The driver in `scrape` decides
//! which pages to ask for.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::html::{select_one, selector, text_of};
use crate::data::Quote;
use crate::error::ExtractionError;

const QUOTE: &str = ".quote";
const TEXT: &str = "span.text";
const AUTHOR: &str = "small.author";
const TAGS: &str = ".tags";
const TAG: &str = "a.tag";
const NEXT: &str = "li.next a";

static QUOTE_SEL: LazyLock<Selector> = LazyLock::new(|| selector(QUOTE));
static TEXT_SEL: LazyLock<Selector> = LazyLock::new(|| selector(TEXT));
static AUTHOR_SEL: LazyLock<Selector> = LazyLock::new(|| selector(AUTHOR));
static TAGS_SEL: LazyLock<Selector> = LazyLock::new(|| selector(TAGS));
static TAG_SEL: LazyLock<Selector> = LazyLock::new(|| selector(TAG));
static NEXT_SEL: LazyLock<Selector> = LazyLock::new(|| selector(NEXT));

/// Every quote block on the page, in document order.
/// `url` is only used to label errors.
pub fn extract_all(doc: &Html, url: &str) -> Result<Vec<Quote>, ExtractionError> {
    doc.select(&QUOTE_SEL)
        .enumerate()
        .map(|(i, block)| extract_one(block, url, i + 1))
        .collect()
}

fn extract_one(block: ElementRef<'_>, url: &str, n: usize) -> Result<Quote, ExtractionError> {
    let missing = |what| ExtractionError { url: url.to_string(), block: n, missing: what };

    let text = select_one(block, &TEXT_SEL).ok_or_else(|| missing(TEXT))?;
    let author = select_one(block, &AUTHOR_SEL).ok_or_else(|| missing(AUTHOR))?;
    let tags = select_one(block, &TAGS_SEL).ok_or_else(|| missing(TAGS))?;

    Ok(Quote {
        text: text_of(text),
        author: text_of(author),
        tags: tags.select(&TAG_SEL).map(text_of).collect(),
    })
}

/// Whether the page advertises a following page.
pub fn has_next(doc: &Html) -> bool {
    doc.select(&NEXT_SEL).next().is_some()
}

/// Raw `href` of the next link, if the link exists and carries one.
pub fn next_href(doc: &Html) -> Option<&str> {
    doc.select(&NEXT_SEL)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::trim)
        .filter(|h| !h.is_empty())
}

/// Selector reported when the next link is unusable.
pub const NEXT_LINK: &str = NEXT;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::parse;

    const PAGE: &str = r#"
        <html><body>
        <div class="quote">
            <span class="text">“A”</span>
            <span>by <small class="author">X</small></span>
            <div class="tags">Tags:
                <a class="tag" href="/tag/life/">life</a>
                <a class="tag" href="/tag/love/">love</a>
            </div>
        </div>
        <div class="quote">
            <span class="text">B</span>
            <small class="author">Y</small>
            <div class="tags"></div>
        </div>
        <nav><ul class="pager"><li class="next"><a href="/page/2/">Next</a></li></ul></nav>
        </body></html>
    "#;

    #[test]
    fn selectors_compile() {
        for css in [QUOTE, TEXT, AUTHOR, TAGS, TAG, NEXT] {
            assert!(Selector::parse(css).is_ok(), "{css}");
        }
    }

    #[test]
    fn extracts_in_document_order() {
        let doc = parse(PAGE.as_bytes());
        let quotes = extract_all(&doc, "p1").unwrap();
        assert_eq!(
            quotes,
            vec![
                Quote::new("“A”", "X", vec!["life".into(), "love".into()]),
                Quote::new("B", "Y", vec![]),
            ]
        );
    }

    #[test]
    fn next_link_detected() {
        let doc = parse(PAGE.as_bytes());
        assert!(has_next(&doc));
        assert_eq!(next_href(&doc), Some("/page/2/"));

        let last = parse(b"<div class='quote'></div>");
        assert!(!has_next(&last));
        assert_eq!(next_href(&last), None);
    }

    #[test]
    fn next_link_without_href() {
        let doc = parse(b"<li class='next'><a>Next</a></li>");
        assert!(has_next(&doc));
        assert_eq!(next_href(&doc), None);
    }

    #[test]
    fn empty_page_yields_nothing() {
        let doc = parse(b"<html><body><p>No quotes found!</p></body></html>");
        assert!(extract_all(&doc, "p").unwrap().is_empty());
    }

    #[test]
    fn missing_author_is_an_error() {
        let html = r#"
            <div class="quote"><span class="text">ok</span><small class="author">A</small><div class="tags"></div></div>
            <div class="quote"><span class="text">bad</span><div class="tags"></div></div>
        "#;
        let doc = parse(html.as_bytes());
        let err = extract_all(&doc, "http://x/page/2/").unwrap_err();
        assert_eq!(
            err,
            ExtractionError { url: "http://x/page/2/".into(), block: 2, missing: "small.author" }
        );
        assert_eq!(err.to_string(), "http://x/page/2/: quote #2 is missing `small.author`");
    }

    #[test]
    fn missing_text_or_tags_is_an_error() {
        let doc = parse(br#"<div class="quote"><small class="author">A</small><div class="tags"></div></div>"#);
        assert_eq!(extract_all(&doc, "u").unwrap_err().missing, "span.text");

        let doc = parse(br#"<div class="quote"><span class="text">t</span><small class="author">A</small></div>"#);
        assert_eq!(extract_all(&doc, "u").unwrap_err().missing, ".tags");
    }
}
