//! Local validation for the buyer strategy-call form.
//!
//! The page posts the form to an external forms processor; that transport is
//! not modelled here. What is modelled is the per-field validation the page
//! runs before it lets a submission out the door.

use serde::{Deserialize, Serialize};

/// The four fields the strategy-call form collects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub timeline: String,
}

/// A single failed field check, surfaced next to the control it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &str, message: &str) -> Self {
        FieldIssue {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl LeadForm {
    /// All failed checks, in the order the fields appear on the page.
    pub fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(FieldIssue::new("name", "Name is required"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            issues.push(FieldIssue::new("email", "Email is required"));
        } else if !looks_like_email(email) {
            issues.push(FieldIssue::new("email", "Enter a valid email address"));
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            issues.push(FieldIssue::new("phone", "Phone number is required"));
        } else if phone.chars().filter(|c| c.is_ascii_digit()).count() < 10 {
            issues.push(FieldIssue::new("phone", "Enter a 10-digit phone number"));
        }

        if self.timeline.trim().is_empty() {
            issues.push(FieldIssue::new("timeline", "Tell us your buying timeline"));
        }

        issues
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Key/value pairs in the order the page posts them to the forms
    /// processor.
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("name".to_string(), self.name.trim().to_string()),
            ("email".to_string(), self.email.trim().to_string()),
            ("phone".to_string(), self.phone.trim().to_string()),
            ("timeline".to_string(), self.timeline.trim().to_string()),
        ]
    }
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_lead() -> LeadForm {
        LeadForm {
            name: "Jordan Rivera".to_string(),
            email: "jordan@example.com".to_string(),
            phone: "(703) 555-0142".to_string(),
            timeline: "3-6 months".to_string(),
        }
    }

    #[test]
    fn test_complete_lead_is_valid() {
        assert!(complete_lead().is_valid());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let issues = LeadForm::default().validate();
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["name", "email", "phone", "timeline"]);
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut lead = complete_lead();
        for bad in ["jordan", "jordan@", "@example.com", "jordan@example", "jordan@.com"] {
            lead.email = bad.to_string();
            assert!(
                lead.validate().iter().any(|i| i.field == "email"),
                "expected email issue for {bad:?}",
            );
        }
    }

    #[test]
    fn test_formatted_phone_counts_digits() {
        let mut lead = complete_lead();
        lead.phone = "703-555-0142".to_string();
        assert!(lead.is_valid());

        lead.phone = "555-0142".to_string();
        assert!(lead.validate().iter().any(|i| i.field == "phone"));
    }

    #[test]
    fn test_form_pairs_preserve_page_order() {
        let pairs = complete_lead().form_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["name", "email", "phone", "timeline"]);
    }
}
