use std::collections::HashSet;

use crate::brief::{Brief, PLACEHOLDER};

const SNIPPET_MAX_CHARS: usize = 170;
const MIN_TOKEN_CHARS: usize = 3;

/// Top-line highlights: first three findings, then first two risks,
/// deduped case-insensitively and capped at `max_ktas`
pub fn build_ktas(brief: &Brief, max_ktas: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let ktas: Vec<String> = brief
        .key_findings
        .iter()
        .take(3)
        .chain(brief.risks.iter().take(2))
        .filter(|line| {
            let key = line.trim().to_lowercase();
            !key.is_empty() && seen.insert(key)
        })
        .take(max_ktas)
        .cloned()
        .collect();

    if ktas.is_empty() {
        vec![PLACEHOLDER.to_string()]
    } else {
        ktas
    }
}

/// Source line that best supports each takeaway, truncated for display,
/// paired with the takeaway's 1-based number.
///
/// Placeholder takeaways are not cited. Returns an empty list when there
/// are no source lines to cite.
pub fn source_snippets(ktas: &[String], source_lines: &[String]) -> Vec<(usize, String)> {
    ktas.iter()
        .enumerate()
        .filter(|(_, kta)| kta.as_str() != PLACEHOLDER)
        .filter_map(|(i, kta)| {
            best_source_line(kta, source_lines).map(|line| (i + 1, truncate_snippet(line)))
        })
        .collect()
}

fn best_source_line<'a>(takeaway: &str, source_lines: &'a [String]) -> Option<&'a str> {
    let wanted = tokens(takeaway);
    let mut best: Option<(&str, f64)> = None;
    for line in source_lines {
        let score = overlap_score(&wanted, line);
        // strictly greater: ties keep the earlier line
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((line.as_str(), score));
        }
    }
    best.map(|(line, _)| line)
}

/// Share of the takeaway's tokens that also appear in `candidate`
#[allow(clippy::cast_precision_loss)]
fn overlap_score(wanted: &HashSet<String>, candidate: &str) -> f64 {
    if wanted.is_empty() {
        return 0.0;
    }
    let shared = tokens(candidate).intersection(wanted).count();
    shared as f64 / wanted.len() as f64
}

/// Lowercase alphanumeric tokens of at least three characters
fn tokens(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

fn truncate_snippet(line: &str) -> String {
    if line.chars().count() <= SNIPPET_MAX_CHARS {
        return line.to_string();
    }
    let head: String = line.chars().take(SNIPPET_MAX_CHARS).collect();
    format!("{}...", head.trim_end())
}
