// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod data;
pub mod error;
pub mod export;
pub mod file;
pub mod log;
pub mod progress;
pub mod runner;
pub mod scrape;

pub use data::Quote;
pub use error::{Error, ExtractionError, FetchError, Result};
