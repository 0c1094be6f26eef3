//! Projection of classified lines into presentation fragments.
//!
//! This is a 1:1, order-preserving map over the classifier output. It carries
//! no heuristics of its own; any change to what the preview shows belongs in
//! the classifier, not here.

use serde::{Deserialize, Serialize};

use crate::preview::classifier::{LineKind, LineRecord};

/// One presentation fragment per classified line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "element", content = "text", rename_all = "snake_case")]
pub enum Fragment {
    LineBreak,
    /// Top-level heading: the candidate's name.
    Heading(String),
    /// Sub-heading: a recognized resume section.
    SubHeading(String),
    /// Styled single line carrying email/phone.
    ContactLine(String),
    Paragraph(String),
}

/// Maps each record to exactly one fragment, preserving order.
pub fn project(records: &[LineRecord]) -> Vec<Fragment> {
    records
        .iter()
        .map(|record| match record.kind {
            LineKind::Blank => Fragment::LineBreak,
            LineKind::NameHeading => Fragment::Heading(record.trimmed_text.clone()),
            LineKind::SectionHeading => Fragment::SubHeading(record.trimmed_text.clone()),
            LineKind::ContactInfo => Fragment::ContactLine(record.trimmed_text.clone()),
            LineKind::Body => Fragment::Paragraph(record.trimmed_text.clone()),
        })
        .collect()
}

/// Renders fragments as a flat HTML string for the preview pane.
pub fn to_html(fragments: &[Fragment]) -> String {
    let mut html = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::LineBreak => html.push_str("<br/>"),
            Fragment::Heading(text) => {
                html.push_str("<h1>");
                html.push_str(&escape(text));
                html.push_str("</h1>");
            }
            Fragment::SubHeading(text) => {
                html.push_str("<h2>");
                html.push_str(&escape(text));
                html.push_str("</h2>");
            }
            Fragment::ContactLine(text) => {
                html.push_str("<p class=\"contact-info\">");
                html.push_str(&escape(text));
                html.push_str("</p>");
            }
            Fragment::Paragraph(text) => {
                html.push_str("<p>");
                html.push_str(&escape(text));
                html.push_str("</p>");
            }
        }
    }
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
