// src/core/html.rs
use encoding_rs::{Encoding, UTF_8};
use scraper::{ElementRef, Html, Selector};

// How far into the document to look for a charset declaration.
const PRESCAN_BYTES: usize = 1024;

/// Lenient parse: bytes are decoded by BOM, then by the declared charset,
/// else as UTF-8; undecodable bytes are replaced and malformed markup is
/// repaired by html5ever. Never fails; missing nodes surface later during
/// extraction.
pub fn parse(raw: &[u8]) -> Html {
    let (text, _, _) = sniff_encoding(raw).decode(raw);
    Html::parse_document(&text)
}

/// Charset named by a `<meta charset=..>` or `http-equiv` content attribute
/// near the top of the document. UTF-16 labels fall back to UTF-8, since the
/// declaration itself was readable as ASCII.
pub fn sniff_encoding(raw: &[u8]) -> &'static Encoding {
    let head = &raw[..raw.len().min(PRESCAN_BYTES)];
    let lower = head.to_ascii_lowercase();

    let mut from = 0;
    while let Some(pos) = find(&lower[from..], b"charset=") {
        let start = from + pos + b"charset=".len();
        let label: Vec<u8> = lower[start..]
            .iter()
            .skip_while(|b| matches!(b, b'"' | b'\'' | b' '))
            .take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.'))
            .copied()
            .collect();
        if let Some(enc) = Encoding::for_label(&label) {
            return enc.output_encoding();
        }
        from = start;
    }
    UTF_8
}

fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    hay.windows(needle.len()).position(|w| w == needle)
}

/// All descendant text, concatenated verbatim (no trimming or normalizing).
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// First match of `sel` under `el`, if any.
pub fn select_one<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// Compile a selector known at build time.
/// Panics only on a typo in a literal, which the unit tests catch.
pub fn selector(css: &'static str) -> Selector {
    match Selector::parse(css) {
        Ok(sel) => sel,
        Err(e) => panic!("bad selector {css:?}: {e}"),
    }
}
