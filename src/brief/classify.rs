use super::keywords::contains_keyword;
use super::model::Section;

type Rule = (fn(&str) -> bool, Section);

/// Evaluated top to bottom; the first matching rule labels the line
const RULES: &[Rule] = &[
    (is_question, Section::OpenQuestions),
    (is_risk, Section::Risks),
    (is_next_step, Section::NextSteps),
    (is_situation, Section::Situation),
    (is_finding, Section::KeyFindings),
];

fn is_question(line: &str) -> bool {
    line.contains('?') || contains_keyword(line, Section::OpenQuestions)
}

fn is_risk(line: &str) -> bool {
    contains_keyword(line, Section::Risks)
}

fn is_next_step(line: &str) -> bool {
    contains_keyword(line, Section::NextSteps)
}

fn is_situation(line: &str) -> bool {
    contains_keyword(line, Section::Situation)
}

fn is_finding(line: &str) -> bool {
    contains_keyword(line, Section::KeyFindings)
}

/// Assign a cleaned line to a section, or `None` when no rule matches
pub fn classify_line(line: &str) -> Option<Section> {
    RULES
        .iter()
        .find(|(applies, _)| applies(line))
        .map(|(_, section)| *section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_mark_wins_over_everything() {
        assert_eq!(
            classify_line("Is the timeline at risk?"),
            Some(Section::OpenQuestions)
        );
        assert_eq!(classify_line("???"), Some(Section::OpenQuestions));
    }

    #[test]
    fn question_keyword_without_mark() {
        assert_eq!(
            classify_line("Need to clarify the pricing assumption"),
            Some(Section::OpenQuestions)
        );
    }

    #[test]
    fn risk_beats_next_step() {
        assert_eq!(
            classify_line("Risk: customer concentration remains high."),
            Some(Section::Risks)
        );
        assert_eq!(
            classify_line("Owner to track the supply blocker"),
            Some(Section::Risks)
        );
    }

    #[test]
    fn remaining_tiers_in_order() {
        assert_eq!(
            classify_line("Next step: assign owner for interview"),
            Some(Section::NextSteps)
        );
        assert_eq!(
            classify_line("Current status is stable, data pending"),
            Some(Section::Situation)
        );
        assert_eq!(
            classify_line("Key finding: margin expanded in two segments"),
            Some(Section::KeyFindings)
        );
    }

    #[test]
    fn unmatched_lines_are_unclassified() {
        assert_eq!(classify_line("Alpha datapoint from interview"), None);
        assert_eq!(classify_line(""), None);
        assert_eq!(classify_line("\u{0}\u{1}binary-ish"), None);
    }
}
