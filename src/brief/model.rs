use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text used for any section that ends up with no content
pub const PLACEHOLDER: &str = "No clear input provided.";

/// Output framing profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Internal,
    Client,
    Investment,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Internal, Mode::Client, Mode::Investment];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Internal => "internal",
            Mode::Client => "client",
            Mode::Investment => "investment",
        }
    }

    /// One-line framing shown in the brief header
    pub fn description(self) -> &'static str {
        match self {
            Mode::Internal => "Internal operational brief with candid execution focus.",
            Mode::Client => "Client-ready brief emphasizing outcomes and clarity.",
            Mode::Investment => "Investment diligence brief focused on value and risk framing.",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five fixed report sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Situation,
    KeyFindings,
    Risks,
    OpenQuestions,
    NextSteps,
}

impl Section {
    /// Render order
    pub const ALL: [Section; 5] = [
        Section::Situation,
        Section::KeyFindings,
        Section::Risks,
        Section::OpenQuestions,
        Section::NextSteps,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Situation => "Situation",
            Section::KeyFindings => "Key Findings",
            Section::Risks => "Risks",
            Section::OpenQuestions => "Open Questions",
            Section::NextSteps => "Next Steps",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Section::Situation => 0,
            Section::KeyFindings => 1,
            Section::Risks => 2,
            Section::OpenQuestions => 3,
            Section::NextSteps => 4,
        }
    }
}

/// Structured brief produced from one notes file.
///
/// Every section holds at least one entry once assembled; `source_lines`
/// keeps the normalized input lines for citation lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Brief {
    pub situation: Vec<String>,
    pub key_findings: Vec<String>,
    pub risks: Vec<String>,
    pub open_questions: Vec<String>,
    pub next_steps: Vec<String>,
    pub source_lines: Vec<String>,
}

impl Brief {
    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::Situation => &self.situation,
            Section::KeyFindings => &self.key_findings,
            Section::Risks => &self.risks,
            Section::OpenQuestions => &self.open_questions,
            Section::NextSteps => &self.next_steps,
        }
    }
}

/// Working per-section line lists, indexed by `Section`
#[derive(Debug, Default, Clone)]
pub(crate) struct Buckets([Vec<String>; 5]);

impl Buckets {
    pub fn push(&mut self, section: Section, line: String) {
        self.0[section.index()].push(line);
    }

    pub fn extend(&mut self, section: Section, lines: impl IntoIterator<Item = String>) {
        self.0[section.index()].extend(lines);
    }

    pub fn take(&mut self, section: Section) -> Vec<String> {
        std::mem::take(&mut self.0[section.index()])
    }

    pub fn len(&self, section: Section) -> usize {
        self.0[section.index()].len()
    }
}
