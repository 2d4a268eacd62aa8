use tracing::debug;

use super::classify::classify_line;
use super::condense::condense;
use super::keywords::SectionLimits;
use super::model::{Brief, Buckets, Mode, Section};
use super::normalize::normalize_lines;

/// Turn unstructured notes into a five-section brief.
///
/// `max_bullets` replaces the mode's per-section limits with one uniform
/// cap. Never fails: unusable input yields placeholder sections.
pub fn parse_notes(raw_text: &str, mode: Mode, max_bullets: Option<usize>) -> Brief {
    let lines = normalize_lines(raw_text);

    let mut buckets = Buckets::default();
    let mut unclassified = Vec::new();
    for line in &lines {
        match classify_line(line) {
            Some(section) => buckets.push(section, line.clone()),
            None => unclassified.push(line.clone()),
        }
    }
    debug!(
        lines = lines.len(),
        unclassified = unclassified.len(),
        situation = buckets.len(Section::Situation),
        findings = buckets.len(Section::KeyFindings),
        risks = buckets.len(Section::Risks),
        questions = buckets.len(Section::OpenQuestions),
        next_steps = buckets.len(Section::NextSteps),
        "Classified note lines"
    );
    buckets.extend(Section::KeyFindings, unclassified);

    let limits = SectionLimits::resolve(mode, max_bullets);
    let [situation, key_findings, risks, open_questions, next_steps] =
        Section::ALL.map(|section| condense(buckets.take(section), section, limits.get(section)));

    Brief {
        situation,
        key_findings,
        risks,
        open_questions,
        next_steps,
        source_lines: lines,
    }
}
