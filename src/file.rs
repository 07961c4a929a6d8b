// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::ExportOptions;
use crate::data::Quote;
use crate::error::Result;
use crate::export::write_to;

/// Write the export file described by `export`, truncating any existing one.
/// Returns the path written to.
pub fn write_quotes(quotes: &[Quote], export: &ExportOptions) -> Result<PathBuf> {
    let path = export.out_path.clone();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_to(&mut out, quotes, export)?;
    out.flush()?;

    info!(path = %path.display(), rows = quotes.len(), "export written");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
