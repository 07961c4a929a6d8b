// src/progress.rs
/// Lightweight progress reporting for the page loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once before the first request.
    fn begin(&mut self, _base_url: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after a page was fetched and extracted.
    fn page_done(&mut self, _page: usize, _url: &str, _records: usize) {}

    /// Called after the last page, only on success.
    fn finish(&mut self, _total: usize) {}
}

/// Prints one line per page to stderr.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, base_url: &str) {
        eprintln!("Scraping {base_url}");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn page_done(&mut self, page: usize, _url: &str, records: usize) {
        eprintln!("  page {page:>3}: {records} quotes");
    }

    fn finish(&mut self, total: usize) {
        eprintln!("Collected {total} quotes");
    }
}
