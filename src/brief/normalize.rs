//! Transcript cleanup
//!
//! Turns raw notes or transcript text into clean candidate lines by removing
//! timestamps, speaker labels, bullets, filler words and meeting metadata.

use regex::Regex;
use std::sync::LazyLock;

use super::keywords::{keywords_for, SECTION_CUE_WORDS};
use super::model::Section;

static METADATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:meeting|recording|transcript(?:ion)?|call)\s+(?:started|ended|stopped|began|paused|resumed)(?:\s+(?:at|on)\b.*)?\.?|(?:attendees|participants|invitees|present)\s*:.*)$",
    )
    .unwrap()
});
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•]\s+|\d+[.)]\s+)").unwrap());
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\[(]?\d{1,2}:\d{2}(?::\d{2})?(?:\s*[AaPp]\.?[Mm](?:\.|\b))?[\])]?\s*(?:[-–—|:]\s*)?")
        .unwrap()
});
static SPEAKER_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:speaker(?:\s*\d+)?|host|co-host|moderator|interviewer|me)$").unwrap()
});
static PROPER_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z'.\-]*(?:\s+[A-Z][A-Za-z'.\-]*){0,2}$").unwrap()
});
static FILLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i),?\s*\b(?:u+m+|u+h+|like|you\s+know|sort\s+of|kind\s+of)\b,?").unwrap()
});
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Split raw text into cleaned, non-empty lines in input order.
///
/// Accepts `\n`, `\r\n` and bare `\r` line endings.
pub fn normalize_lines(raw_text: &str) -> Vec<String> {
    raw_text
        .split(['\r', '\n'])
        .filter_map(normalize_line)
        .collect()
}

/// Clean a single physical line, or `None` when nothing useful remains
pub fn normalize_line(raw_line: &str) -> Option<String> {
    let trimmed = raw_line.trim();
    if trimmed.is_empty() || is_metadata(trimmed) {
        return None;
    }

    let line = BULLET_RE.replace(trimmed, "");
    let line = strip_timestamps(line.trim());
    if is_metadata(line) {
        return None;
    }

    let line = strip_speaker(line);
    let line = FILLER_RE.replace_all(line, " ");
    let line = WHITESPACE_RE.replace_all(&line, " ");
    let cleaned = line.trim_matches(is_separator);

    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

fn is_metadata(line: &str) -> bool {
    METADATA_RE.is_match(line)
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '–' | '—' | '|' | ':') || c.is_whitespace()
}

/// Strip stacked leading timestamps such as `[10:02 AM] 10:05 - `
fn strip_timestamps(mut line: &str) -> &str {
    while let Some(m) = TIMESTAMP_RE.find(line) {
        if m.end() == 0 {
            break;
        }
        line = line[m.end()..].trim_start();
    }
    line
}

/// Drop a `Speaker:` prefix unless the prefix is a content label like `Risk:`
fn strip_speaker(line: &str) -> &str {
    let Some((prefix, rest)) = line.split_once(':') else {
        return line;
    };
    let prefix = prefix.trim();
    if prefix.is_empty() || is_section_cue(prefix) {
        return line;
    }
    if SPEAKER_LABEL_RE.is_match(prefix) || PROPER_NAME_RE.is_match(prefix) {
        return rest.trim_start();
    }
    line
}

fn is_section_cue(prefix: &str) -> bool {
    prefix.split_whitespace().any(|word| {
        let word = word
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '-')
            .to_lowercase();
        SECTION_CUE_WORDS.contains(&word.as_str())
            || Section::ALL
                .iter()
                .any(|s| keywords_for(*s).contains(&word.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_and_metadata_lines() {
        let raw = "Meeting started\n\n   \nRecording started\nAttendees: Alex, Sam\n[09:58] Meeting ended.";
        assert!(normalize_lines(raw).is_empty());
    }

    #[test]
    fn strips_bullets_and_numbering() {
        assert_eq!(normalize_line("- Risk: churn").as_deref(), Some("Risk: churn"));
        assert_eq!(normalize_line("* margin up").as_deref(), Some("margin up"));
        assert_eq!(normalize_line("2) assign owner").as_deref(), Some("assign owner"));
        assert_eq!(normalize_line("1. review scope").as_deref(), Some("review scope"));
    }

    #[test]
    fn strips_stacked_timestamps() {
        assert_eq!(
            normalize_line("[10:02 AM] 10:05 - pricing held flat").as_deref(),
            Some("pricing held flat")
        );
        assert_eq!(
            normalize_line("(00:01:23) revenue grew 12%").as_deref(),
            Some("revenue grew 12%")
        );
    }

    #[test]
    fn strips_speaker_labels_and_names() {
        assert_eq!(
            normalize_line("Speaker 2: churn is flat").as_deref(),
            Some("churn is flat")
        );
        assert_eq!(
            normalize_line("[10:02] Jane Doe: we saw margin gains").as_deref(),
            Some("we saw margin gains")
        );
        assert_eq!(normalize_line("Host: welcome back").as_deref(), Some("welcome back"));
    }

    #[test]
    fn keeps_section_labels_as_content() {
        assert_eq!(
            normalize_line("Risk: customer concentration").as_deref(),
            Some("Risk: customer concentration")
        );
        assert_eq!(
            normalize_line("Open Question: who owns pricing?").as_deref(),
            Some("Open Question: who owns pricing?")
        );
        assert_eq!(
            normalize_line("Background: Q1 kickoff").as_deref(),
            Some("Background: Q1 kickoff")
        );
    }

    #[test]
    fn leaves_lowercase_prefixes_alone() {
        assert_eq!(
            normalize_line("ratio stayed at 3:1 overall").as_deref(),
            Some("ratio stayed at 3:1 overall")
        );
    }

    #[test]
    fn removes_filler_words() {
        assert_eq!(
            normalize_line("Um, we uh sort of need, you know, a plan").as_deref(),
            Some("we need a plan")
        );
        // whole words only
        assert_eq!(
            normalize_line("likely upside from umbrella deal").as_deref(),
            Some("likely upside from umbrella deal")
        );
    }

    #[test]
    fn trims_residual_separators() {
        assert_eq!(normalize_line("| status: green |").as_deref(), Some("status: green"));
        assert_eq!(normalize_line("Alex:").as_deref(), None);
        assert_eq!(normalize_line("---").as_deref(), None);
    }

    #[test]
    fn handles_all_newline_conventions() {
        let lines = normalize_lines("one\r\ntwo\rthree\nfour");
        assert_eq!(lines, vec!["one", "two", "three", "four"]);
    }
}
