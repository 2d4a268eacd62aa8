//! Markdown output for a parsed brief

mod email;
mod takeaways;

use chrono::{DateTime, Local};
use std::path::Path;

use crate::brief::{Brief, Mode, Section};

pub use email::{email_draft, subject};
pub use takeaways::{build_ktas, source_snippets};

pub const DEFAULT_MAX_KTAS: usize = 4;

/// Presentation knobs that do not affect classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub max_ktas: usize,
    pub email_ready: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_ktas: DEFAULT_MAX_KTAS,
            email_ready: false,
        }
    }
}

pub fn format_markdown(brief: &Brief, mode: Mode, source: &Path, options: RenderOptions) -> String {
    format_markdown_at(brief, mode, source, options, Local::now())
}

/// Same as [`format_markdown`] with a fixed generation time
pub fn format_markdown_at(
    brief: &Brief,
    mode: Mode,
    source: &Path,
    options: RenderOptions,
    generated_at: DateTime<Local>,
) -> String {
    let mut lines = vec![
        "# Briefsmith Work Brief".to_string(),
        String::new(),
        format!("- Mode: `{mode}`"),
        format!("- Source: `{}`", source.display()),
        format!("- Generated: `{}`", generated_at.format("%Y-%m-%d %H:%M:%S")),
        format!("- Framing: {}", mode.description()),
        String::new(),
    ];

    let ktas = build_ktas(brief, options.max_ktas);
    append_section(&mut lines, "Key Takeaways (KTAs)", &ktas);
    append_snippets(&mut lines, &ktas, &brief.source_lines);

    for section in Section::ALL {
        append_section(&mut lines, section.title(), brief.section(section));
    }

    if options.email_ready {
        lines.push("## Team Update Email Draft".to_string());
        lines.push(String::new());
        lines.extend(email_draft(brief, mode));
        lines.push(String::new());
    }

    format!("{}\n", lines.join("\n").trim())
}

fn append_section(lines: &mut Vec<String>, title: &str, items: &[String]) {
    lines.push(format!("## {title}"));
    lines.extend(items.iter().map(|item| format!("- {item}")));
    lines.push(String::new());
}

fn append_snippets(lines: &mut Vec<String>, ktas: &[String], source_lines: &[String]) {
    lines.push("## KTA Source Snippets".to_string());
    let snippets = source_snippets(ktas, source_lines);
    if snippets.is_empty() {
        lines.push("- No source snippets available.".to_string());
    } else {
        lines.extend(
            snippets
                .iter()
                .map(|(number, snippet)| format!("- KTA {number}: \"{snippet}\"")),
        );
    }
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::PLACEHOLDER;
    use chrono::TimeZone;

    fn sample_brief() -> Brief {
        let one = |s: &str| vec![s.to_string()];
        Brief {
            situation: one("Current state summary."),
            key_findings: one("Finding one."),
            risks: one("Key risk."),
            open_questions: one("Open item?"),
            next_steps: one("Do next thing."),
            source_lines: vec!["Finding one".to_string(), "Key risk".to_string()],
        }
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 4, 9, 30, 0).unwrap()
    }

    #[test]
    fn header_carries_mode_source_and_time() {
        let md = format_markdown_at(
            &sample_brief(),
            Mode::Investment,
            Path::new("deal_notes.txt"),
            RenderOptions::default(),
            fixed_time(),
        );
        assert!(md.starts_with("# Briefsmith Work Brief\n\n- Mode: `investment`\n"));
        assert!(md.contains("- Source: `deal_notes.txt`"));
        assert!(md.contains("- Generated: `2026-03-04 09:30:00`"));
        assert!(md.contains("Investment diligence brief"));
        assert!(md.ends_with("- Do next thing.\n"));
    }

    #[test]
    fn snippets_cite_source_lines() {
        let md = format_markdown_at(
            &sample_brief(),
            Mode::Client,
            Path::new("a.txt"),
            RenderOptions::default(),
            fixed_time(),
        );
        assert!(md.contains(
            "## KTA Source Snippets\n- KTA 1: \"Finding one\"\n- KTA 2: \"Key risk\"\n"
        ));
    }

    #[test]
    fn missing_sources_render_notice() {
        let mut brief = sample_brief();
        brief.source_lines.clear();
        let md = format_markdown(
            &brief,
            Mode::Client,
            Path::new("a.txt"),
            RenderOptions::default(),
        );
        assert!(md.contains("- No source snippets available."));
    }

    #[test]
    fn placeholder_takeaway_keeps_numbering_of_cited_ones() {
        let mut brief = sample_brief();
        brief.key_findings = vec![PLACEHOLDER.to_string()];
        let md = format_markdown_at(
            &brief,
            Mode::Client,
            Path::new("a.txt"),
            RenderOptions::default(),
            fixed_time(),
        );
        assert!(md.contains("## KTA Source Snippets\n- KTA 2: \"Key risk\"\n\n"));
        assert!(!md.contains("- KTA 1:"));
    }

    #[test]
    fn email_draft_falls_back_on_placeholders() {
        let mut brief = sample_brief();
        brief.risks = vec![PLACEHOLDER.to_string()];
        let options = RenderOptions {
            email_ready: true,
            ..RenderOptions::default()
        };
        let md = format_markdown(&brief, Mode::Internal, Path::new("a.txt"), options);

        assert!(md.contains("## Team Update Email Draft"));
        assert!(md.contains(&format!("Subject: {}", subject(Mode::Internal))));
        assert!(md.contains("- Key finding: Finding one."));
        assert!(md.contains("- Top risk: No major risk flagged yet."));
        assert!(md.contains("- Next step: Do next thing."));
        assert!(md.ends_with("[Your Name]\n"));
    }
}
