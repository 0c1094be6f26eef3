//! Format Check advisories for the preview's "Format Check" tab.
//!
//! The four standing advisories are static guidance shown for every resume.
//! On top of those, `derived_notes` flags gaps the classifier can actually
//! see in this specific document.

use serde::{Deserialize, Serialize};

use crate::preview::classifier::{LineKind, LineRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorySeverity {
    Info,
    Warning,
}

/// One advisory item, static or derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub title: String,
    pub description: String,
    pub severity: AdvisorySeverity,
}

/// Full format-check payload for one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatCheck {
    /// Standing guidance, identical for every document.
    pub advisories: Vec<Advisory>,
    /// Notes derived from the actual classification of this document.
    pub derived_notes: Vec<Advisory>,
}

fn standing_advisories() -> Vec<Advisory> {
    vec![
        Advisory {
            title: "Use Standard Fonts".to_string(),
            description: "Stick to common fonts like Arial, Calibri, or Times New Roman. \
                          Our previews use ATS-friendly fonts."
                .to_string(),
            severity: AdvisorySeverity::Info,
        },
        Advisory {
            title: "Avoid Columns and Tables".to_string(),
            description: "Complex layouts can confuse ATS. A single-column format is safest. \
                          This editor encourages a single-column layout."
                .to_string(),
            severity: AdvisorySeverity::Info,
        },
        Advisory {
            title: "Use Standard Section Headers".to_string(),
            description: "Use conventional headers like 'Experience', 'Education', and \
                          'Skills'. Our preview parser looks for these."
                .to_string(),
            severity: AdvisorySeverity::Info,
        },
        Advisory {
            title: "Be Mindful of Special Characters".to_string(),
            description: "Excessive use of special characters or symbols can sometimes \
                          cause parsing errors."
                .to_string(),
            severity: AdvisorySeverity::Warning,
        },
    ]
}

/// Builds the format-check payload from classifier output.
pub fn run_format_check(records: &[LineRecord]) -> FormatCheck {
    let mut derived_notes = Vec::new();

    let has_content = records.iter().any(|r| r.kind != LineKind::Blank);

    if has_content {
        if !records.iter().any(|r| r.kind == LineKind::SectionHeading) {
            derived_notes.push(Advisory {
                title: "No Recognized Section Headers".to_string(),
                description: "None of the standard section headers (Experience, Education, \
                              Skills, ...) were found. ATS parsers may not segment this \
                              resume correctly."
                    .to_string(),
                severity: AdvisorySeverity::Warning,
            });
        }

        if !records.iter().any(|r| r.kind == LineKind::ContactInfo) {
            derived_notes.push(Advisory {
                title: "No Contact Information Detected".to_string(),
                description: "No email address or phone number was found. Recruiters need \
                              a way to reach you."
                    .to_string(),
                severity: AdvisorySeverity::Warning,
            });
        }

        if !records.iter().any(|r| r.kind == LineKind::NameHeading) {
            derived_notes.push(Advisory {
                title: "No Name Line Detected".to_string(),
                description: "The first lines look too long to be a name. Start the resume \
                              with your name on its own line."
                    .to_string(),
                severity: AdvisorySeverity::Warning,
            });
        }
    }

    FormatCheck {
        advisories: standing_advisories(),
        derived_notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::classifier::classify;

    #[test]
    fn test_standing_advisories_always_present() {
        let check = run_format_check(&classify("John Smith\njohn@x.com\nSummary\nBuilt."));
        assert_eq!(check.advisories.len(), 4);
        assert_eq!(check.advisories[0].title, "Use Standard Fonts");
    }

    #[test]
    fn test_well_formed_resume_has_no_derived_notes() {
        let check = run_format_check(&classify("John Smith\njohn@x.com\nSummary\nBuilt."));
        assert!(check.derived_notes.is_empty());
    }

    #[test]
    fn test_missing_sections_and_contact_flagged() {
        let records =
            classify("word word word word\nword word word word\nword word word word");
        let check = run_format_check(&records);
        let titles: Vec<&str> = check.derived_notes.iter().map(|a| a.title.as_str()).collect();
        assert!(titles.contains(&"No Recognized Section Headers"));
        assert!(titles.contains(&"No Contact Information Detected"));
        assert!(titles.contains(&"No Name Line Detected"));
    }

    #[test]
    fn test_empty_document_gets_no_derived_notes() {
        let check = run_format_check(&classify(""));
        assert!(check.derived_notes.is_empty());
        // Standing guidance still applies.
        assert_eq!(check.advisories.len(), 4);
    }
}
