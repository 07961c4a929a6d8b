// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::{Parser, builder::RangedU64ValueParser, value_parser};

use crate::config::{
    consts::{BASE_URL, DEFAULT_OUT_FILE, REQUEST_TIMEOUT_SECS},
    options::{AppOptions, NextPage, TagsFormat},
};
use crate::progress::{ConsoleProgress, Progress};

/// Scrape every page of a quote listing into a CSV file.
#[derive(Parser, Debug)]
#[command(name = "quotes_scrape", version, about)]
pub struct Args {
    /// Output CSV file (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
    pub out: PathBuf,

    /// Site root; page N is fetched from <base-url>page/N/
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Follow the next link's href instead of counting pages
    #[arg(long)]
    pub follow_links: bool,

    /// Stop after this many pages (at least 1)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_pages: Option<usize>,

    /// Request timeout in seconds (at least 1)
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS, value_parser = value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Join tags with this character instead of writing a list literal
    #[arg(long)]
    pub tags_sep: Option<char>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// No progress lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        opts.scrape.set_base_url(&self.base_url);
        if self.follow_links {
            opts.scrape.next_page = NextPage::FollowLink;
        }
        opts.scrape.max_pages = self.max_pages;
        opts.scrape.timeout = Duration::from_secs(self.timeout);

        opts.export.out_path = self.out.clone();
        if let Some(sep) = self.tags_sep {
            opts.export.tags = TagsFormat::Joined(sep);
        }
        opts
    }
}

pub fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    crate::log::init(args.verbose);

    let opts = args.to_options();
    let mut console = ConsoleProgress;
    let progress: Option<&mut dyn Progress> = if args.quiet { None } else { Some(&mut console) };

    let summary = crate::runner::run(&opts, progress)?;
    if !args.quiet {
        println!("Wrote {} quotes to {}", summary.quotes, summary.file_written.display());
    }
    Ok(())
}
