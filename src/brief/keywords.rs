//! Static keyword tables and per-mode section limits.
//!
//! Classification, salience scoring and label stripping all read from these
//! tables so they can be checked without running the pipeline.

use regex::Regex;
use std::sync::LazyLock;

use super::model::{Mode, Section};

pub const SITUATION_KEYWORDS: &[&str] = &[
    "context",
    "background",
    "current",
    "status",
    "situation",
    "today",
    "scope",
    "overview",
    "baseline",
];

pub const FINDINGS_KEYWORDS: &[&str] = &[
    "finding",
    "findings",
    "insight",
    "insights",
    "result",
    "results",
    "observed",
    "analysis",
    "evidence",
    "data",
];

pub const RISK_KEYWORDS: &[&str] = &[
    "risk",
    "risks",
    "blocker",
    "issue",
    "issues",
    "constraint",
    "constraints",
    "downside",
    "exposure",
    "concern",
    "challenge",
];

pub const QUESTION_KEYWORDS: &[&str] = &[
    "question",
    "questions",
    "unknown",
    "unknowns",
    "assumption",
    "assumptions",
    "clarify",
    "unclear",
];

pub const NEXT_STEPS_KEYWORDS: &[&str] = &[
    "next",
    "action",
    "actions",
    "owner",
    "timeline",
    "follow-up",
    "followup",
    "plan",
    "deliver",
    "due",
];

/// Leading words that mark a `Word:` prefix as a content label rather
/// than a speaker name
pub const SECTION_CUE_WORDS: &[&str] = &[
    "background",
    "situation",
    "finding",
    "findings",
    "risk",
    "risks",
    "open",
    "next",
];

pub fn keywords_for(section: Section) -> &'static [&'static str] {
    match section {
        Section::Situation => SITUATION_KEYWORDS,
        Section::KeyFindings => FINDINGS_KEYWORDS,
        Section::Risks => RISK_KEYWORDS,
        Section::OpenQuestions => QUESTION_KEYWORDS,
        Section::NextSteps => NEXT_STEPS_KEYWORDS,
    }
}

/// Maximum bullets kept per section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLimits {
    pub situation: usize,
    pub key_findings: usize,
    pub risks: usize,
    pub open_questions: usize,
    pub next_steps: usize,
}

impl SectionLimits {
    pub const fn uniform(limit: usize) -> Self {
        Self {
            situation: limit,
            key_findings: limit,
            risks: limit,
            open_questions: limit,
            next_steps: limit,
        }
    }

    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Internal => INTERNAL_LIMITS,
            Mode::Client => CLIENT_LIMITS,
            Mode::Investment => INVESTMENT_LIMITS,
        }
    }

    /// Mode defaults, or `max_bullets` applied to every section
    pub fn resolve(mode: Mode, max_bullets: Option<usize>) -> Self {
        max_bullets.map_or_else(|| Self::for_mode(mode), Self::uniform)
    }

    pub fn get(&self, section: Section) -> usize {
        match section {
            Section::Situation => self.situation,
            Section::KeyFindings => self.key_findings,
            Section::Risks => self.risks,
            Section::OpenQuestions => self.open_questions,
            Section::NextSteps => self.next_steps,
        }
    }
}

const INTERNAL_LIMITS: SectionLimits = SectionLimits {
    situation: 4,
    key_findings: 5,
    risks: 4,
    open_questions: 4,
    next_steps: 5,
};

const CLIENT_LIMITS: SectionLimits = SectionLimits {
    situation: 3,
    key_findings: 4,
    risks: 3,
    open_questions: 3,
    next_steps: 4,
};

const INVESTMENT_LIMITS: SectionLimits = SectionLimits {
    situation: 3,
    key_findings: 5,
    risks: 4,
    open_questions: 3,
    next_steps: 4,
};

/// A keyword compiled to a case-insensitive whole-word pattern
pub struct KeywordMatcher {
    pattern: Regex,
}

impl KeywordMatcher {
    fn new(keyword: &str) -> Self {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))
            .expect("keyword pattern is valid");
        Self { pattern }
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

static MATCHERS: LazyLock<[Vec<KeywordMatcher>; 5]> = LazyLock::new(|| {
    Section::ALL.map(|section| {
        keywords_for(section)
            .iter()
            .map(|keyword| KeywordMatcher::new(*keyword))
            .collect()
    })
});

pub fn matchers_for(section: Section) -> &'static [KeywordMatcher] {
    &MATCHERS[section.index()]
}

/// True when `line` contains any of the section's keywords as a whole word
pub fn contains_keyword(line: &str, section: Section) -> bool {
    matchers_for(section).iter().any(|m| m.is_match(line))
}

/// Number of distinct section keywords present in `line`
pub fn count_keywords(line: &str, section: Section) -> usize {
    matchers_for(section)
        .iter()
        .filter(|m| m.is_match(line))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_limits_match_table() {
        let client = SectionLimits::for_mode(Mode::Client);
        assert_eq!(Section::ALL.map(|s| client.get(s)), [3, 4, 3, 3, 4]);

        let internal = SectionLimits::for_mode(Mode::Internal);
        assert_eq!(Section::ALL.map(|s| internal.get(s)), [4, 5, 4, 4, 5]);

        let investment = SectionLimits::for_mode(Mode::Investment);
        assert_eq!(Section::ALL.map(|s| investment.get(s)), [3, 5, 4, 3, 4]);
    }

    #[test]
    fn override_applies_to_every_section() {
        for mode in Mode::ALL {
            let limits = SectionLimits::resolve(mode, Some(2));
            assert!(Section::ALL.iter().all(|s| limits.get(*s) == 2));
        }
        assert_eq!(
            SectionLimits::resolve(Mode::Client, None),
            SectionLimits::for_mode(Mode::Client)
        );
    }

    #[test]
    fn keyword_match_respects_word_boundaries() {
        assert!(contains_keyword("The RISK is real", Section::Risks));
        assert!(!contains_keyword("Brisk growth in Q2", Section::Risks));
        assert!(!contains_keyword("Datapoint from interview", Section::KeyFindings));
        assert!(contains_keyword("Schedule a follow-up call", Section::NextSteps));
        assert!(!contains_keyword("Planning is fine", Section::NextSteps));
    }

    #[test]
    fn counts_distinct_keywords() {
        assert_eq!(count_keywords("risk and issue, risk again", Section::Risks), 2);
        assert_eq!(count_keywords("nothing here", Section::Risks), 0);
    }

    #[test]
    fn keyword_tables_are_disjoint() {
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in &Section::ALL[i + 1..] {
                for kw in keywords_for(*a) {
                    assert!(!keywords_for(*b).contains(kw), "{kw} in two tables");
                }
            }
        }
    }
}
