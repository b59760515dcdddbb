//! Last-resort locator: Wistia media embeds.
//!
//! Many marketing pages host their promo video on Wistia without declaring
//! `<track>` elements. The embed leaves a media id behind in one of a few
//! known forms; Wistia's public metadata endpoint then lists the caption
//! tracks for that media.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::fetch::{PageFetcher, resolve};
use crate::vtt;

/// Base URL caption `src` values are resolved against.
const WISTIA_BASE: &str = "https://fast.wistia.com/";

/// The embed forms a Wistia media id can appear in.
fn media_id_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"wistia_async_([a-zA-Z0-9]+)",
            r"https://fast\.wistia\.net/embed/iframe/([a-zA-Z0-9]+)",
            r"https://fast\.wistia\.com/embed/medias/([a-zA-Z0-9]+)\.jsonp",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("media id pattern is valid"))
        .collect()
    })
}

/// A caption track listed in Wistia's media metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionTrack {
    pub language: String,
    pub url: String,
}

/// Extract the first Wistia media identifier from the page HTML.
pub fn find_media_id(html: &str) -> Option<String> {
    for pattern in media_id_patterns() {
        if let Some(captures) = pattern.captures(html) {
            return Some(captures.get(1)?.as_str().to_owned());
        }
    }
    None
}

/// Read the caption tracks out of a media metadata document.
///
/// Tracks live at `media.captions[]`; the file reference may be under `src`
/// or `url`, and the language under `language` or `label`.
pub fn parse_caption_tracks(media_json: &Value) -> Vec<CaptionTrack> {
    let Some(captions) = media_json
        .pointer("/media/captions")
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let mut tracks = Vec::new();
    for caption in captions {
        let src = caption
            .get("src")
            .or_else(|| caption.get("url"))
            .and_then(Value::as_str);
        let Some(src) = src else {
            continue;
        };

        let Ok(url) = resolve(WISTIA_BASE, src) else {
            continue;
        };

        let language = caption
            .get("language")
            .or_else(|| caption.get("label"))
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_owned();

        tracks.push(CaptionTrack { language, url });
    }

    tracks
}

/// Try the Wistia strategy against a page.
///
/// Returns `Ok(None)` when the page has no media id, the media lists no
/// caption tracks, or the first track has no cue text. Metadata and caption
/// fetch failures are fatal: at this point we know the page embeds a video,
/// so a dead endpoint is worth reporting over a generic "not found".
pub fn extract<F: PageFetcher>(fetcher: &F, html: &str) -> crate::Result<Option<Vec<String>>> {
    let Some(media_id) = find_media_id(html) else {
        return Ok(None);
    };

    tracing::debug!(media_id = %media_id, "found wistia embed");

    let metadata_url = format!("{WISTIA_BASE}embed/medias/{media_id}.json");
    let media_json: Value = serde_json::from_slice(&fetcher.fetch(&metadata_url)?)?;

    let tracks = parse_caption_tracks(&media_json);
    let Some(track) = tracks.first() else {
        return Ok(None);
    };

    let raw = fetcher.fetch(&track.url)?;
    let cues = vtt::parse_cue_text(&String::from_utf8_lossy(&raw));
    if cues.is_empty() {
        return Ok(None);
    }

    let mut lines = vec![format!("[{}]", track.language)];
    lines.extend(cues);
    Ok(Some(lines))
}
