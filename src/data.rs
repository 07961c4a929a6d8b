// src/data.rs

/// One scraped quote. Field order matches the export header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl Quote {
    pub const HEADERS: [&'static str; 3] = ["text", "author", "tags"];

    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: Vec<String>) -> Self {
        Self { text: text.into(), author: author.into(), tags }
    }
}
