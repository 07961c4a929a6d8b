// src/bin/cli.rs
use quotes_scrape::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
