// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use quotes_scrape::core::Fetch;
use quotes_scrape::error::FetchError;
use reqwest::StatusCode;

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("quotes_scrape_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// One quote block. `author: None` drops the author element.
pub struct Block<'a> {
    pub text: &'a str,
    pub author: Option<&'a str>,
    pub tags: &'a [&'a str],
}

pub fn block<'a>(text: &'a str, author: &'a str, tags: &'a [&'a str]) -> Block<'a> {
    Block { text, author: Some(author), tags }
}

/// A page shaped like the real listing. `next` is the href of the pager link.
pub fn page(blocks: &[Block<'_>], next: Option<&str>) -> String {
    let mut html = String::from("<!DOCTYPE html><html><head><title>Quotes</title></head><body><div class=\"container\">\n");
    for b in blocks {
        html.push_str("<div class=\"quote\" itemscope>\n");
        html.push_str(&format!("  <span class=\"text\" itemprop=\"text\">{}</span>\n", b.text));
        if let Some(a) = b.author {
            html.push_str(&format!("  <span>by <small class=\"author\" itemprop=\"author\">{a}</small></span>\n"));
        }
        html.push_str("  <div class=\"tags\">\n    Tags:\n");
        for t in b.tags {
            html.push_str(&format!("    <a class=\"tag\" href=\"/tag/{t}/page/1/\">{t}</a>\n"));
        }
        html.push_str("  </div>\n</div>\n");
    }
    html.push_str("<nav><ul class=\"pager\">\n");
    if let Some(href) = next {
        html.push_str(&format!("  <li class=\"next\"><a href=\"{href}\">Next <span aria-hidden=\"true\">&rarr;</span></a></li>\n"));
    }
    html.push_str("</ul></nav>\n</div></body></html>\n");
    html
}

/// Serves pages from memory and remembers what was asked for.
#[derive(Default)]
pub struct MemoryFetcher {
    pages: HashMap<String, String>,
    pub requested: RefCell<Vec<String>>,
}

impl MemoryFetcher {
    pub fn with(mut self, url: &str, body: String) -> Self {
        self.pages.insert(url.to_string(), body);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Fetch for MemoryFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        match self.pages.get(url) {
            Some(body) => Ok(body.clone().into_bytes()),
            None => Err(FetchError::Status { url: url.to_string(), status: StatusCode::NOT_FOUND }),
        }
    }
}
