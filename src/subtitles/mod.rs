//! WebVTT flattening: strip cue structure and inline markup, keep the spoken text.

/// Outcome of a subtitle extraction attempt. Absence is a normal result here, not
/// an error: it drives the orchestrator's fallback to whisper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtitleOutcome {
    Found(String),
    NotAvailable,
}

/// Convert raw WebVTT text into a single clean line of prose.
///
/// Drops the header, NOTE/STYLE directives, timestamp lines, and numeric cue ids,
/// strips inline `<...>` tags, collapses adjacent duplicate lines (auto-generated
/// captions repeat the previous line for display continuity), and joins the rest
/// with single spaces. Total: malformed input yields an empty or partial string,
/// never an error.
pub fn clean_vtt(vtt: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    for raw in vtt.lines() {
        let line = raw.trim();
        if line.is_empty()
            || line.starts_with("WEBVTT")
            || line.starts_with("NOTE")
            || line.starts_with("STYLE")
            || line.contains("-->")
            || is_cue_number(line)
        {
            continue;
        }

        let stripped = strip_inline_tags(line);
        if stripped.is_empty() {
            continue;
        }

        // Adjacent duplicates only; a legitimately repeated phrase later in the
        // stream is kept.
        if lines.last().map(|prev| prev == &stripped) != Some(true) {
            lines.push(stripped);
        }
    }

    lines.join(" ")
}

/// A line consisting solely of decimal digits is a cue identifier.
fn is_cue_number(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

/// Remove `<...>` spans (styling tags like `<c>` and inline timestamps like
/// `<00:00:01.000>`) by scanning rather than parsing.
fn strip_inline_tags(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_tag = false;
    for c in line.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_vtt_reference_input() {
        let vtt = "WEBVTT\n\n1\n00:00:00.000 --> 00:00:02.000\nHello <c>world</c>\nHello world\n";
        assert_eq!(clean_vtt(vtt), "Hello world");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_vtt(""), "");
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        let text = "Hello world this is already clean";
        assert_eq!(clean_vtt(text), text);
        assert_eq!(clean_vtt(&clean_vtt(text)), clean_vtt(text));
    }

    #[test]
    fn test_drops_note_and_style_blocks() {
        let vtt = "WEBVTT\n\nNOTE this is a comment\nSTYLE\n::cue { color: red }\nActual text\n";
        assert_eq!(clean_vtt(vtt), "::cue { color: red } Actual text");
    }

    #[test]
    fn test_strips_inline_timestamp_tags() {
        let vtt = "WEBVTT\n\n00:00:00.000 --> 00:00:05.000\nso<00:00:00.320> today<00:00:00.640> we\n";
        assert_eq!(clean_vtt(vtt), "so today we");
    }

    #[test]
    fn test_adjacent_duplicates_collapse_but_not_global() {
        let vtt = "WEBVTT\n\nfirst line\nfirst line\nsecond line\nfirst line\n";
        assert_eq!(clean_vtt(vtt), "first line second line first line");
    }

    #[test]
    fn test_numeric_cue_ids_dropped() {
        let vtt = "WEBVTT\n\n42\n00:01:00.000 --> 00:01:02.000\nline with 42 in it\n";
        assert_eq!(clean_vtt(vtt), "line with 42 in it");
    }

    #[test]
    fn test_line_reduced_to_nothing_by_tags_is_dropped() {
        let vtt = "WEBVTT\n\n<c></c>\nreal text\n";
        assert_eq!(clean_vtt(vtt), "real text");
    }

    #[test]
    fn test_unclosed_tag_drops_rest_of_line() {
        assert_eq!(strip_inline_tags("hello <c unclosed"), "hello");
    }
}
