//! Result region rendering
//!
//! HTML for web front ends and plain text for the terminal. Both render the
//! neutral placeholder before the first submission and the tiered result card
//! afterwards.

use std::fmt::Write;

use crate::form::{FieldSpec, Widget};
use crate::risk::RiskAssessment;
use crate::session::{LoadNotice, SessionState};

/// Width of the text progress bar in characters
const TEXT_BAR_WIDTH: usize = 40;

/// Render the result region as an HTML fragment
#[must_use]
pub fn html(state: &SessionState) -> String {
    match state {
        SessionState::AwaitingInput => placeholder_html(),
        SessionState::Resulted(assessment) => result_html(assessment),
    }
}

fn placeholder_html() -> String {
    r#"<div class="result-card" style="background-color: #d2c0a8; border: 2px dashed #ccc;">
    <h1 style="font-size: 6rem; margin-bottom: 20px;">🩺</h1>
    <h3 style="font-size: 2rem; color: #333;">Analysis Awaiting</h3>
    <p style="font-size: 1.2rem; color: #75808b; margin-top: 10px;">
        Please fill out the form on the left<br>
        <b>and click the "ANALYZE RISK" button.</b>
    </p>
</div>
"#
    .to_string()
}

fn result_html(assessment: &RiskAssessment) -> String {
    let palette = assessment.palette;
    format!(
        r#"<div class="result-card" style="background-color: {background}; border-left: 10px solid {border};">
    <h2 style="color: {color}; margin: 5px 0; font-size: 2.5rem; font-weight: 800;">{headline}</h2>
    <h1 style="color: {color}; font-size: 6rem; margin: 10px 0; font-family: 'Arial', sans-serif;">{percent}</h1>
    <div style="width: 80%; background-color: #eee; height: 10px; border-radius: 10px; margin: 15px auto;">
        <div style="width: {score}%; background-color: {color}; height: 10px; border-radius: 10px;"></div>
    </div>
    <p style="color: #555; font-size: 1.1rem; margin-top: 15px; padding: 0 10px;">{advice}</p>
</div>
"#,
        background = palette.background,
        border = palette.border,
        color = palette.color,
        headline = assessment.headline,
        percent = assessment.percent_label(),
        score = assessment.risk_score,
        advice = assessment.advice,
    )
}

/// Render the result region as plain text
#[must_use]
pub fn text(state: &SessionState) -> String {
    match state {
        SessionState::AwaitingInput => {
            "Analysis Awaiting\nPlease fill out the form and click \"ANALYZE RISK\".\n".to_string()
        }
        SessionState::Resulted(assessment) => {
            // Truncation keeps the bar from overstating the score
            let filled = ((assessment.risk_score / 100.0) * TEXT_BAR_WIDTH as f64) as usize;
            let filled = filled.min(TEXT_BAR_WIDTH);
            format!(
                "{} {}\n[{}{}]\n{}\n",
                assessment.headline,
                assessment.percent_label(),
                "#".repeat(filled),
                "-".repeat(TEXT_BAR_WIDTH - filled),
                assessment.advice
            )
        }
    }
}

/// Render the artifact load failure
#[must_use]
pub fn notice_text(notice: &LoadNotice) -> String {
    format!("{}\n{}\n", notice.message, notice.hint)
}

/// Render the form description for the terminal
#[must_use]
pub fn form_text(fields: &[FieldSpec]) -> String {
    let mut out = String::new();
    for field in fields {
        let _ = writeln!(out, "{} ({})", field.label, field.key);
        match &field.widget {
            Widget::Number {
                min,
                max,
                default,
                step,
            } => {
                let _ = writeln!(
                    out,
                    "    range {min}-{max}, step {step}, default {default}"
                );
            }
            Widget::Select { options, default } => {
                for option in options {
                    let marker = if option.code == *default { "*" } else { " " };
                    let _ = writeln!(out, "  {marker} {} = {}", option.code, option.label);
                }
            }
        }
        for line in field.help.lines() {
            let _ = writeln!(out, "    {line}");
        }
    }
    out
}
