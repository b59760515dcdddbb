// Download and extract a transcript from a marketing landing-page video.
//
// Locator order: HTML <track> captions, embedded JSON transcript arrays,
// Wistia media embeds. Exits non-zero when the page yields none of them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use verbatim::logging;
use verbatim::scrape::TranscriptScraper;

#[derive(Parser, Debug)]
#[command(name = "verbatim-scrape")]
#[command(about = "Extract a video transcript from a landing page", long_about = None)]
struct Args {
    /// Page URL that embeds the video.
    url: String,

    /// Save the transcript to this file instead of printing to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let scraper = TranscriptScraper::new()?;
    let transcript = scraper.extract(&args.url)?;

    write_output(args.output.as_deref(), &transcript.as_text())?;
    Ok(())
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(path, text)
                .with_context(|| format!("failed to write transcript: {}", path.display()))
        }
        None => {
            println!("{text}");
            Ok(())
        }
    }
}
