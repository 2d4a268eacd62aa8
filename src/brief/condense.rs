//! Per-section dedupe, salience ranking, truncation and bullet polishing

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::keywords::count_keywords;
use super::model::{Section, PLACEHOLDER};

/// Bullets longer than this get compressed
const MAX_BULLET_CHARS: usize = 190;
/// A first sentence shorter than this is not a useful summary
const MIN_SENTENCE_CHARS: usize = 35;
const MAX_BULLET_WORDS: usize = 28;
const SHORT_LINE_CHARS: usize = 140;

static LABEL_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:key|main|top|open|next)\s+)?(?:background|context|situation|status|overview|findings?|insights?|results?|risks?|concerns?|issues?|blockers?|questions?|steps?|actions?|action\s+items?)\s*:\s*",
    )
    .unwrap()
});
static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Reduce a section bucket to at most `limit` polished bullets.
///
/// Lines are deduped, ranked by salience (stable for ties) and rewritten
/// as one-sentence bullets. An empty result becomes the placeholder.
pub fn condense(lines: Vec<String>, section: Section, limit: usize) -> Vec<String> {
    let mut ranked: Vec<(f64, String)> = dedupe(lines)
        .into_iter()
        .map(|line| (salience_score(&line, section), line))
        .collect();
    // sort_by is stable, so equal scores keep input order
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut seen = HashSet::new();
    let mut bullets = Vec::with_capacity(limit.min(ranked.len()));
    for (_, line) in ranked {
        if bullets.len() >= limit {
            break;
        }
        let bullet = to_bullet(&line);
        if seen.insert(dedupe_key(&bullet)) {
            bullets.push(bullet);
        }
    }

    if bullets.is_empty() {
        bullets.push(PLACEHOLDER.to_string());
    }
    bullets
}

/// Lowercased alphanumeric characters only
pub fn dedupe_key(line: &str) -> String {
    line.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Keep the first occurrence of each normalized line
pub fn dedupe(lines: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    lines
        .into_iter()
        .filter(|line| seen.insert(dedupe_key(line)))
        .collect()
}

pub fn salience_score(line: &str, section: Section) -> f64 {
    let mut score = 1.0;
    if line.chars().any(|c| c.is_ascii_digit()) {
        score += 1.0;
    }
    if line.chars().count() < SHORT_LINE_CHARS {
        score += 0.5;
    }
    if line.contains(" vs ") || line.contains('%') {
        score += 0.5;
    }
    // Keyword counts are tiny, the cast is lossless
    #[allow(clippy::cast_precision_loss)]
    let keyword_hits = count_keywords(line, section) as f64;
    score + 0.4 * keyword_hits
}

/// Rewrite a line as a capitalized, punctuated one-sentence bullet
pub fn to_bullet(line: &str) -> String {
    let stripped = LABEL_PREFIX_RE.replace(line, "");
    let body = if stripped.trim().is_empty() {
        line.trim()
    } else {
        stripped.trim()
    };

    let mut bullet = capitalize(&compress(body));
    if !bullet.ends_with(['.', '!', '?']) {
        bullet.push('.');
    }
    bullet
}

fn compress(line: &str) -> String {
    if line.chars().count() <= MAX_BULLET_CHARS {
        return line.to_string();
    }

    if let Some(end) = SENTENCE_END_RE.find(line) {
        // the terminator is a single ASCII byte
        let sentence = line[..=end.start()].trim();
        let len = sentence.chars().count();
        if (MIN_SENTENCE_CHARS..=MAX_BULLET_CHARS).contains(&len) {
            return sentence.to_string();
        }
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() > MAX_BULLET_WORDS {
        let head = words[..MAX_BULLET_WORDS].join(" ");
        return format!("{}...", head.trim_end_matches([',', ';', ':']));
    }
    line.to_string()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
