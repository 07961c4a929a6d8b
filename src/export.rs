// src/export.rs
use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::config::options::{ExportOptions, TagsFormat};
use crate::data::Quote;
use crate::error::Result;

/* ---------------- Writing ---------------- */

/// Header + one row per quote to any writer.
/// Minimal quoting, CRLF record terminator.
pub fn write_to<W: Write>(w: W, quotes: &[Quote], export: &ExportOptions) -> Result<()> {
    let mut out = WriterBuilder::new()
        .delimiter(export.delim())
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(w);

    out.write_record(Quote::HEADERS)?;
    for q in quotes {
        let tags = render_tags(&q.tags, export.tags);
        out.write_record([q.text.as_str(), q.author.as_str(), tags.as_str()])?;
    }
    out.flush()?;
    Ok(())
}

/// Whole export as a String (same bytes `write_to` produces).
pub fn to_export_string(quotes: &[Quote], export: &ExportOptions) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_to(&mut buf, quotes, export)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/* ---------------- Tags column ---------------- */

pub fn render_tags(tags: &[String], format: TagsFormat) -> String {
    match format {
        TagsFormat::ListLiteral => list_literal(tags),
        TagsFormat::Joined(sep) => {
            let mut buf = [0u8; 4];
            tags.join(sep.encode_utf8(&mut buf))
        }
    }
}

/// `['a', 'b']`, `[]`
fn list_literal(tags: &[String]) -> String {
    let items: Vec<String> = tags.iter().map(|t| str_literal(t)).collect();
    format!("[{}]", items.join(", "))
}

/// Quoted string literal. Single quotes unless the value holds `'` and no `"`.
fn str_literal(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => out.push_str(&hex_escape(c)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Printable unless a control, format, surrogate, private-use, unassigned
/// or separator char; the plain space is the one printable separator.
fn is_printable(c: char) -> bool {
    use GeneralCategory::*;
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        Control | Format | Surrogate | PrivateUse | Unassigned
            | LineSeparator | ParagraphSeparator | SpaceSeparator
    )
}

/// `\xNN` up to 0xff, `\uNNNN` up to 0xffff, `\UNNNNNNNN` beyond.
fn hex_escape(c: char) -> String {
    let n = c as u32;
    if n <= 0xff {
        format!("\\x{n:02x}")
    } else if n <= 0xffff {
        format!("\\u{n:04x}")
    } else {
        format!("\\U{n:08x}")
    }
}
