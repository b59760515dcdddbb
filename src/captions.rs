//! Primary locator: HTML `<track>` caption declarations.
//!
//! Media elements declare their subtitle/caption files via
//! `<track kind="captions" src="..." label="...">`. We collect those
//! declarations, resolve each `src` against the page URL, download the
//! referenced WebVTT/SRT file, and extract its cue text.

use scraper::{Html, Selector};

use crate::fetch::{PageFetcher, resolve};
use crate::vtt;

/// A caption declaration found in the page HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRef {
    /// The `src` attribute, verbatim (may be relative to the page).
    pub src: String,

    /// The human-readable `label` attribute, when present.
    pub label: Option<String>,
}

/// Collect caption/subtitle `<track>` declarations from an HTML document.
///
/// Tracks with other `kind` values (chapters, descriptions, metadata) and
/// tracks without a `src` are ignored.
pub fn find_caption_tracks(html: &str) -> Vec<TrackRef> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("track") else {
        return Vec::new();
    };

    let mut tracks = Vec::new();
    for element in document.select(&selector) {
        let kind = element
            .value()
            .attr("kind")
            .unwrap_or_default()
            .to_ascii_lowercase();
        if kind != "subtitles" && kind != "captions" {
            continue;
        }

        let Some(src) = element.value().attr("src") else {
            continue;
        };

        tracks.push(TrackRef {
            src: src.to_owned(),
            label: element.value().attr("label").map(str::to_owned),
        });
    }

    tracks
}

/// Locate `<track>` declarations and download each referenced caption file.
///
/// Returns the combined cue text lines; a track `label` becomes a `[label]`
/// header line ahead of its cues. A track whose download fails is logged and
/// skipped so one broken CDN link doesn't sink the whole page. An empty result
/// means this strategy found nothing usable.
pub fn extract<F: PageFetcher>(fetcher: &F, page_url: &str, html: &str) -> crate::Result<Vec<String>> {
    let tracks = find_caption_tracks(html);
    if tracks.is_empty() {
        return Ok(Vec::new());
    }

    let mut lines = Vec::new();
    for track in &tracks {
        let caption_url = resolve(page_url, &track.src)?;

        let raw = match fetcher.fetch(&caption_url) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(url = %caption_url, error = %err, "skipping caption track");
                continue;
            }
        };

        let cues = vtt::parse_cue_text(&String::from_utf8_lossy(&raw));
        if cues.is_empty() {
            continue;
        }

        if let Some(label) = &track.label {
            lines.push(format!("[{label}]"));
        }
        lines.extend(cues);
    }

    Ok(lines)
}
