//! Line classifier: segments raw resume text into typed line records.
//!
//! This is the heuristic that drives the styled preview. It is deliberately a
//! pure function so it can be unit-tested without any HTTP or rendering
//! machinery around it.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// North-American-style phone number: optional parenthesized area code,
/// then 3 digits, separator, 4 digits. Separators: space, dot, or hyphen.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());

/// Section headings recognized by the preview parser, lowercase,
/// matched case-insensitively with any `:` characters stripped.
pub const KNOWN_SECTION_HEADINGS: &[&str] = &[
    "summary",
    "experience",
    "education",
    "skills",
    "projects",
    "profile",
    "professional experience",
    "technical skills",
    "certifications",
    "work experience",
];

/// Classification assigned to a single resume line. Exactly one per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    Blank,
    SectionHeading,
    NameHeading,
    ContactInfo,
    Body,
}

/// One classified line of the input resume, in original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    /// 0-based position in the original line sequence.
    pub index: usize,
    /// The untrimmed source line.
    pub raw_text: String,
    /// `raw_text` with leading/trailing whitespace removed.
    pub trimmed_text: String,
    pub kind: LineKind,
}

/// Classifies every line of `text` into a `LineRecord`.
///
/// Lines are split on `\n`. The empty string yields an empty sequence; any
/// other input yields exactly one record per line, in input order. Total over
/// all inputs, no failure modes.
///
/// Rule order is significant: section-heading match beats the name-heading
/// heuristic, which beats contact-info detection, which beats plain body.
/// The name heading is single-shot per pass and only eligible on the first
/// three lines by original index (blank lines still consume an index).
pub fn classify(text: &str) -> Vec<LineRecord> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut name_heading_assigned = false;

    // split, not str::lines(): a trailing newline produces a trailing empty
    // segment, which must surface as a Blank record.
    text.split('\n')
        .enumerate()
        .map(|(index, raw)| {
            let trimmed = raw.trim();
            let kind = if trimmed.is_empty() {
                LineKind::Blank
            } else if is_section_heading(trimmed) {
                LineKind::SectionHeading
            } else if !name_heading_assigned && index < 3 && token_count(trimmed) < 4 {
                name_heading_assigned = true;
                LineKind::NameHeading
            } else if is_contact_info(trimmed) {
                LineKind::ContactInfo
            } else {
                LineKind::Body
            };

            LineRecord {
                index,
                raw_text: raw.to_string(),
                trimmed_text: trimmed.to_string(),
                kind,
            }
        })
        .collect()
}

/// Exact match against `KNOWN_SECTION_HEADINGS`, case-insensitive,
/// with all literal `:` characters removed first.
fn is_section_heading(trimmed: &str) -> bool {
    let normalized = trimmed.to_lowercase().replace(':', "");
    KNOWN_SECTION_HEADINGS.contains(&normalized.as_str())
}

fn is_contact_info(trimmed: &str) -> bool {
    trimmed.contains('@') || PHONE_RE.is_match(trimmed)
}

fn token_count(trimmed: &str) -> usize {
    trimmed.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<LineKind> {
        classify(text).into_iter().map(|r| r.kind).collect()
    }

    #[test]
    fn test_typical_resume_header() {
        let records = classify("John Smith\njohn@x.com\nSummary\nBuilt things.");
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].kind, LineKind::NameHeading);
        assert_eq!(records[0].trimmed_text, "John Smith");
        assert_eq!(records[1].kind, LineKind::ContactInfo);
        assert_eq!(records[2].kind, LineKind::SectionHeading);
        assert_eq!(records[3].kind, LineKind::Body);
    }

    #[test]
    fn test_empty_string_yields_empty_sequence() {
        assert!(classify("").is_empty());
    }

    #[test]
    fn test_single_line_no_newline_yields_one_record() {
        let records = classify("hello");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].index, 0);
    }

    #[test]
    fn test_record_indices_match_input_order() {
        let records = classify("a\nb\n\nc\nd");
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.index, i);
        }
    }

    #[test]
    fn test_at_most_one_name_heading() {
        // Both lines pass the positional/token test; only the first wins.
        let records = classify("Jane Doe\nJohn Roe");
        let name_count = records
            .iter()
            .filter(|r| r.kind == LineKind::NameHeading)
            .count();
        assert_eq!(name_count, 1);
        assert_eq!(records[0].kind, LineKind::NameHeading);
        assert_eq!(records[1].kind, LineKind::Body);
    }

    #[test]
    fn test_four_tokens_disqualifies_name_heading() {
        // 6 tokens on line 0: too long to be a name.
        assert_eq!(kinds("This Is A Long Line Here"), vec![LineKind::Body]);
        // Exactly 4 tokens is also disqualified (< 4 required).
        assert_eq!(kinds("One Two Three Four"), vec![LineKind::Body]);
        // 3 tokens qualifies.
        assert_eq!(kinds("One Two Three"), vec![LineKind::NameHeading]);
    }

    #[test]
    fn test_name_heading_only_in_first_three_lines() {
        // Line 3 (index 3) is short but past the eligibility window.
        let records = classify("word word word word\nword word word word\nword word word word\nJane Doe");
        assert_eq!(records[3].kind, LineKind::Body);
    }

    #[test]
    fn test_blank_lines_still_consume_eligibility_indices() {
        // Indices 0-2 are blank; the name-like line lands at index 3 and
        // must NOT become NameHeading. Eligibility is strictly index-based.
        let records = classify("\n\n\nJane Doe");
        assert_eq!(records[0].kind, LineKind::Blank);
        assert_eq!(records[3].kind, LineKind::Body);
    }

    #[test]
    fn test_section_heading_beats_name_heading() {
        // "Summary" on line 0 would pass the name test, but heading wins.
        assert_eq!(kinds("Summary"), vec![LineKind::SectionHeading]);
    }

    #[test]
    fn test_heading_match_is_case_insensitive_and_colon_stripped() {
        let records = classify("Jane Doe\nSkills:\nPython, Go");
        assert_eq!(records[1].kind, LineKind::SectionHeading);
        assert_eq!(records[1].trimmed_text, "Skills:");
        assert_eq!(records[2].kind, LineKind::Body);

        assert_eq!(kinds("WORK EXPERIENCE"), vec![LineKind::SectionHeading]);
        assert_eq!(kinds("  education  "), vec![LineKind::SectionHeading]);
    }

    #[test]
    fn test_heading_does_not_consume_name_eligibility() {
        // Only a NameHeading assignment sets the single-shot flag. A heading
        // on line 0 leaves the name slot open, so a short line still inside
        // the window claims it.
        let records = classify("Skills:\nPython, Go");
        assert_eq!(records[0].kind, LineKind::SectionHeading);
        assert_eq!(records[1].kind, LineKind::NameHeading);
    }

    #[test]
    fn test_heading_recognized_at_any_position() {
        let records = classify("a\nb\nc\nd\nEducation");
        assert_eq!(records[4].kind, LineKind::SectionHeading);
    }

    #[test]
    fn test_email_line_is_contact_info() {
        // Past the name window so the @ rule is what fires.
        let records = classify("Jane Doe\nSenior Engineer with ten years experience\njane.doe@example.com");
        assert_eq!(records[2].kind, LineKind::ContactInfo);
    }

    #[test]
    fn test_phone_line_is_contact_info() {
        // Name assigned on line 0 so the phone rule is what fires on line 1.
        let records = classify("Jane Doe\n(555) 123-4567");
        assert_eq!(records[1].kind, LineKind::ContactInfo);

        let records = classify("Jane Doe\n555.123.4567");
        assert_eq!(records[1].kind, LineKind::ContactInfo);

        let records = classify("Jane Doe\n555 123 4567");
        assert_eq!(records[1].kind, LineKind::ContactInfo);
    }

    #[test]
    fn test_name_heading_beats_contact_info_in_window() {
        // Short @-line at index 0: name heuristic fires first.
        assert_eq!(kinds("jane@x.com"), vec![LineKind::NameHeading]);
    }

    #[test]
    fn test_phone_like_line_in_name_window_is_name_heading() {
        // A long first line does not consume the name slot, so a short
        // phone-like line at index 1 is still claimed by the name rule.
        let records = classify("word word word word\n(555) 123-4567");
        assert_eq!(records[0].kind, LineKind::Body);
        assert_eq!(records[1].kind, LineKind::NameHeading);
    }

    #[test]
    fn test_contact_line_after_name_assigned() {
        let records = classify("Jane Doe\njane@x.com");
        assert_eq!(records[1].kind, LineKind::ContactInfo);
    }

    #[test]
    fn test_all_blank_input() {
        // Two newlines delimit three (empty) segments.
        assert_eq!(
            kinds("\n\n"),
            vec![LineKind::Blank, LineKind::Blank, LineKind::Blank]
        );
    }

    #[test]
    fn test_trailing_newline_yields_trailing_blank() {
        let records = classify("Jane Doe\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].kind, LineKind::Blank);
    }

    #[test]
    fn test_whitespace_only_line_is_blank() {
        let records = classify("   \t  ");
        assert_eq!(records[0].kind, LineKind::Blank);
        assert_eq!(records[0].raw_text, "   \t  ");
        assert_eq!(records[0].trimmed_text, "");
    }

    #[test]
    fn test_raw_text_preserved_untrimmed() {
        let records = classify("word word word word\n  Led migration to Kubernetes  ");
        assert_eq!(records[1].raw_text, "  Led migration to Kubernetes  ");
        assert_eq!(records[1].trimmed_text, "Led migration to Kubernetes");
    }

    #[test]
    fn test_binary_looking_garbage_is_total() {
        let garbage = "\u{0}\u{1}\u{2}xx\nyy\u{7f}\n@@@@";
        let records = classify(garbage);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_idempotent() {
        let input = "Jane Doe\njane@x.com\nExperience\nDid things at a company for years";
        assert_eq!(classify(input), classify(input));
    }

    #[test]
    fn test_phone_without_area_code_parens() {
        let records = classify("Jane Doe\n555-123-4567");
        assert_eq!(records[1].kind, LineKind::ContactInfo);
    }

    #[test]
    fn test_plain_sentence_is_body() {
        let records = classify("word word word word\nShipped the quarterly release on time");
        assert_eq!(records[1].kind, LineKind::Body);
    }
}
