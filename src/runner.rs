// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::net::{Fetch, HttpFetcher},
    error::Result,
    file::write_quotes,
    progress::Progress,
    scrape::collect_all,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub file_written: PathBuf,
    pub quotes: usize,
}

/// Top-level runner over the network.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let fetcher = HttpFetcher::new(opts.scrape.timeout)?;
    run_with(&fetcher, opts, progress)
}

/// Collect every page first, then write. A failed collection writes nothing.
pub fn run_with(
    fetcher: &dyn Fetch,
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let quotes = collect_all(fetcher, &opts.scrape, progress)?;
    let file_written = write_quotes(&quotes, &opts.export)?;
    Ok(RunSummary { file_written, quotes: quotes.len() })
}
