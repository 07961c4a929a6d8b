// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of *where the data lives in the HTML* and *how to
//! read it*. Each spec works on an already parsed document.
//!
//! ## What lives here
//! - **Selector choice** for record blocks, fields and the pager.
//! - **Strict extraction** into typed records: a block missing a required
//!   field is an error, never a silently skipped row.
//!
//! ## What does **not** live here
//! - Networking (`core::net`), page ordering (`scrape`), export (`export`, `file`).
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect_all → core::net::Fetch::fetch
//!                           → core::html::parse
//!                           → specs::quotes::extract_all / has_next
//!     → file::write_quotes
//! ```
pub mod quotes;
