//! Page fetch capability for the scraper half.
//!
//! Network access sits behind the [`PageFetcher`] trait so the locator
//! strategies can be exercised in tests with canned responses. The production
//! implementation is a blocking `reqwest` client.

use reqwest::Url;
use reqwest::blocking::Client;

use crate::{Error, Result};

/// Browser-like User-Agent sent with every request.
///
/// The landing pages we scrape refuse requests from default client UAs.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/125.0 Safari/537.36";

/// Capability for fetching a URL and returning its raw bytes.
///
/// Implementations should treat any non-success HTTP status as an error.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Production fetcher backed by a blocking `reqwest` client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with the browser UA and a TLS ceiling of 1.2.
    ///
    /// The ceiling works around the landing-page CDN, which negotiates TLS 1.3
    /// and then drops the connection mid-handshake.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .max_tls_version(reqwest::tls::Version::TLS_1_2)
            .build()?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        Ok(resp.bytes()?.to_vec())
    }
}

/// Resolve `href` against `base`, handling both absolute and relative references.
pub(crate) fn resolve(base: &str, href: &str) -> Result<String> {
    let base = Url::parse(base).map_err(|e| Error::msg(format!("invalid base URL '{base}': {e}")))?;
    let resolved = base
        .join(href)
        .map_err(|e| Error::msg(format!("failed to resolve '{href}' against '{base}': {e}")))?;
    Ok(resolved.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_keeps_absolute_hrefs() -> crate::Result<()> {
        let url = resolve("https://example.com/page", "https://cdn.example.net/a.vtt")?;
        assert_eq!(url, "https://cdn.example.net/a.vtt");
        Ok(())
    }

    #[test]
    fn resolve_joins_relative_hrefs_against_the_page() -> crate::Result<()> {
        let url = resolve("https://example.com/promo/video", "/captions/en.vtt")?;
        assert_eq!(url, "https://example.com/captions/en.vtt");

        let url = resolve("https://example.com/promo/video", "en.vtt")?;
        assert_eq!(url, "https://example.com/promo/en.vtt");
        Ok(())
    }

    #[test]
    fn resolve_rejects_invalid_base() {
        let err = resolve("not a url", "en.vtt").unwrap_err();
        assert!(err.to_string().contains("invalid base URL"));
    }
}
