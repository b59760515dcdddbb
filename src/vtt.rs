//! WebVTT/SRT cue-text extraction.
//!
//! Both formats interleave timing metadata with the text we actually want, so
//! this module strips everything that is not cue text:
//! - the `WEBVTT` header line
//! - `NOTE` comment blocks (WebVTT)
//! - timing lines (`-->`)
//! - pure-integer cue numbers (SRT)
//!
//! Lines belonging to one multi-line cue are joined with a single space.

/// Extract the cue text from a WebVTT or SRT document.
///
/// Returns one string per cue, in document order. Empty cues are dropped.
pub fn parse_cue_text(data: &str) -> Vec<String> {
    let mut cues: Vec<String> = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut skipping_note = false;

    for raw_line in data.lines() {
        // Also strips a leading BOM, which some caption servers emit.
        let line = raw_line.trim_matches(['\u{feff}', ' ', '\t']);

        if line.is_empty() {
            flush_cue(&mut buffer, &mut cues);
            skipping_note = false;
            continue;
        }

        let upper = line.to_uppercase();
        if upper.starts_with("WEBVTT") {
            continue;
        }
        if upper.starts_with("NOTE") {
            skipping_note = true;
            continue;
        }
        if skipping_note {
            continue;
        }

        // Timing line.
        if line.contains("-->") {
            continue;
        }

        // SRT files number their cues. Skip pure integers.
        if !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }

        buffer.push(line);
    }

    flush_cue(&mut buffer, &mut cues);
    cues
}

/// Join the buffered lines of one cue and append it, dropping empty results.
fn flush_cue(buffer: &mut Vec<&str>, cues: &mut Vec<String>) {
    if buffer.is_empty() {
        return;
    }
    let cue = buffer.join(" ").trim().to_owned();
    buffer.clear();
    if !cue.is_empty() {
        cues.push(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_webvtt_cues_and_skips_metadata() {
        let data = "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nHello there.\n\n00:00:02.000 --> 00:00:04.000\nWelcome back.\n";
        assert_eq!(parse_cue_text(data), vec!["Hello there.", "Welcome back."]);
    }

    #[test]
    fn joins_multi_line_cues_with_a_space() {
        let data = "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nfirst line\nsecond line\n";
        assert_eq!(parse_cue_text(data), vec!["first line second line"]);
    }

    #[test]
    fn skips_note_blocks() {
        let data = "WEBVTT\n\nNOTE this is a comment\nstill the comment\n\n00:00:00.000 --> 00:00:01.000\nreal text\n";
        assert_eq!(parse_cue_text(data), vec!["real text"]);
    }

    #[test]
    fn parses_srt_cues_and_skips_numbers() {
        let data = "1\n00:00:00,000 --> 00:00:02,000\nFirst cue.\n\n2\n00:00:02,000 --> 00:00:04,000\nSecond cue.\n";
        assert_eq!(parse_cue_text(data), vec!["First cue.", "Second cue."]);
    }

    #[test]
    fn strips_leading_bom() {
        let data = "\u{feff}WEBVTT\n\n00:00:00.000 --> 00:00:01.000\ntext\n";
        assert_eq!(parse_cue_text(data), vec!["text"]);
    }

    #[test]
    fn final_cue_without_trailing_blank_line_is_kept() {
        let data = "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nlast cue";
        assert_eq!(parse_cue_text(data), vec!["last cue"]);
    }

    #[test]
    fn empty_input_yields_no_cues() {
        assert!(parse_cue_text("").is_empty());
        assert!(parse_cue_text("WEBVTT\n").is_empty());
    }
}
