// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// How the URL of the following page is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NextPage {
    /// `base_url + "page/{n}/"`; the next link only signals that more pages exist.
    #[default]
    Counter,
    /// Resolve the next link's `href` against the current page URL.
    FollowLink,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    base_url: String,
    pub next_page: NextPage,
    pub max_pages: Option<usize>,
    pub timeout: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            next_page: NextPage::Counter,
            max_pages: None,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ScrapeOptions {
    pub fn with_base_url(base_url: &str) -> Self {
        let mut opts = Self::default();
        opts.set_base_url(base_url);
        opts
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Always stored with a trailing '/', so page paths append cleanly.
    pub fn set_base_url(&mut self, text: &str) {
        let s = text.trim();
        self.base_url = if s.ends_with('/') { s.to_string() } else { format!("{s}/") };
    }

    /// URL of page `n` (1-based) in counter mode. Page 1 is the base URL itself.
    pub fn page_url(&self, n: usize) -> String {
        if n <= 1 {
            return self.base_url.clone();
        }
        format!("{}{}", self.base_url, PAGE_PATH_TMPL.replace("{n}", &n.to_string()))
    }
}

/// Rendering of the tags column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagsFormat {
    /// Bracketed list literal: `['life', 'love']`.
    #[default]
    ListLiteral,
    /// Plain join: `life;love`.
    Joined(char),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_path: PathBuf,
    pub tags: TagsFormat,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            tags: TagsFormat::ListLiteral,
        }
    }
}

impl ExportOptions {
    pub fn delim(&self) -> u8 {
        CSV_DELIM
    }
}
