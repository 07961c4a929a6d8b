// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://quotes.toscrape.com/";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("quotes_scrape/", env!("CARGO_PKG_VERSION"));

// Pagination (counter mode appends this to the base URL)
pub const PAGE_PATH_TMPL: &str = "page/{n}/";

// Export
pub const DEFAULT_OUT_FILE: &str = "quotes.csv";
pub const CSV_DELIM: u8 = b',';
