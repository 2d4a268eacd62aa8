use crate::brief::{Brief, Mode, PLACEHOLDER};

pub fn subject(mode: Mode) -> &'static str {
    match mode {
        Mode::Internal => "Internal Update: Work Brief Highlights",
        Mode::Client => "Client Update: Brief Summary and Next Steps",
        Mode::Investment => "Investment Update: Diligence Highlights and Key Risks",
    }
}

/// Short team update citing the top finding, risk and next step
pub fn email_draft(brief: &Brief, mode: Mode) -> Vec<String> {
    let finding = first_or(&brief.key_findings, "No key finding captured yet.");
    let risk = first_or(&brief.risks, "No major risk flagged yet.");
    let next_step = first_or(&brief.next_steps, "Next step still to be confirmed.");

    vec![
        format!("Subject: {}", subject(mode)),
        String::new(),
        "Hi team,".to_string(),
        String::new(),
        "Quick update from the latest notes:".to_string(),
        String::new(),
        format!("- Key finding: {finding}"),
        format!("- Top risk: {risk}"),
        format!("- Next step: {next_step}"),
        String::new(),
        "Happy to walk through details or adjust priorities.".to_string(),
        String::new(),
        "Thanks,".to_string(),
        "[Your Name]".to_string(),
    ]
}

/// First real entry of a section; placeholder-only sections count as empty
fn first_or<'a>(items: &'a [String], fallback: &'a str) -> &'a str {
    items
        .first()
        .map(String::as_str)
        .filter(|item| *item != PLACEHOLDER)
        .unwrap_or(fallback)
}
