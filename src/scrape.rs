//! High-level transcript extraction from a landing page.
//!
//! We expose a single entry point (`TranscriptScraper`) that runs the locator
//! strategies in a fixed order, first success wins:
//! 1. HTML `<track>` caption declarations ([`crate::captions`])
//! 2. Embedded JSON transcript arrays ([`crate::json_transcript`])
//! 3. Wistia media embeds ([`crate::wistia`])
//!
//! The fetcher is generic so tests can run the whole chain against canned
//! pages without touching the network.

use crate::captions;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::json_transcript;
use crate::wistia;
use crate::{Error, Result};

/// The extracted transcript: ordered cue/entry lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the transcript as plain text, one line per cue/entry.
    pub fn as_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Runs the locator strategies against a page URL.
pub struct TranscriptScraper<F: PageFetcher = HttpFetcher> {
    fetcher: F,
}

impl TranscriptScraper<HttpFetcher> {
    /// Create a scraper backed by the production HTTP fetcher.
    pub fn new() -> Result<Self> {
        Ok(Self::with_fetcher(HttpFetcher::new()?))
    }
}

impl<F: PageFetcher> TranscriptScraper<F> {
    /// Create a scraper with a custom fetch capability.
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch `page_url` and extract its transcript.
    ///
    /// Fails with [`Error::TranscriptNotFound`] when every strategy comes up
    /// empty. Page fetch failures propagate as [`Error::Http`].
    pub fn extract(&self, page_url: &str) -> Result<Transcript> {
        let page = self.fetcher.fetch(page_url)?;
        let html = String::from_utf8_lossy(&page);

        let lines = captions::extract(&self.fetcher, page_url, &html)?;
        if !lines.is_empty() {
            tracing::debug!(lines = lines.len(), "extracted transcript from caption tracks");
            return Ok(Transcript::new(lines));
        }

        if let Some(lines) = json_transcript::extract(&html) {
            tracing::debug!(lines = lines.len(), "extracted transcript from embedded JSON");
            return Ok(Transcript::new(lines));
        }

        if let Some(lines) = wistia::extract(&self.fetcher, &html)? {
            tracing::debug!(lines = lines.len(), "extracted transcript from wistia embed");
            return Ok(Transcript::new(lines));
        }

        Err(Error::TranscriptNotFound(format!(
            "no caption tracks, JSON transcript, or media embed in '{page_url}'"
        )))
    }
}
