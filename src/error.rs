// src/error.rs
use std::io;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Anything that can abort a run. Nothing is recovered locally.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write failed: {0}")]
    Csv(csv::Error),
}

// The csv writer flushes its own buffer mid-record; surface those as plain I/O.
impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        if !e.is_io_error() {
            return Error::Csv(e);
        }
        match e.into_kind() {
            csv::ErrorKind::Io(io) => Error::Io(io),
            other => Error::Io(io::Error::other(format!("{other:?}"))),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Expected markup was not on the page.
///
/// `block` is the 1-based position of the quote block on its page,
/// or 0 when the failure concerns the page itself (e.g. the next link).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{url}: {} is missing `{missing}`", describe_block(.block))]
pub struct ExtractionError {
    pub url: String,
    pub block: usize,
    pub missing: &'static str,
}

fn describe_block(block: &usize) -> String {
    if *block == 0 { "page".to_string() } else { format!("quote #{block}") }
}
