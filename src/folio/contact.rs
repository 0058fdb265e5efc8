//! Contact form screening.
//!
//! Sending is someone else's job; this only decides whether a submission
//! should go out at all and what it contains.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const STATUS_BLOCKED: &str = "Submission blocked.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Honeypot field, hidden from people. Bots fill it in.
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screening {
    Blocked,
    Ready(Submission),
}

impl ContactForm {
    pub fn screen(&self) -> Screening {
        self.screen_at(Utc::now())
    }

    pub fn screen_at(&self, now: DateTime<Utc>) -> Screening {
        if !self.website.trim().is_empty() {
            return Screening::Blocked;
        }
        Screening::Ready(Submission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            submitted_at: now,
        })
    }
}

/// Address behind a `mailto:` link, or the link text when the href is
/// something else.
pub fn email_from_href(href: &str, fallback_text: &str) -> String {
    match href.strip_prefix("mailto:") {
        Some(address) => address.to_string(),
        None => fallback_text.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn form(website: &str) -> ContactForm {
        ContactForm {
            name: " Ada ".into(),
            email: "ada@example.com ".into(),
            message: "Hello\n".into(),
            website: website.into(),
        }
    }

    #[test]
    fn filled_honeypot_blocks() {
        assert_eq!(form("http://spam.example").screen(), Screening::Blocked);
    }

    #[test]
    fn blank_honeypot_passes_with_trimmed_fields() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let Screening::Ready(submission) = form("   ").screen_at(now) else {
            panic!("expected submission");
        };
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "Hello");
        assert_eq!(submission.submitted_at, now);
    }

    #[test]
    fn email_from_mailto_or_text() {
        assert_eq!(
            email_from_href("mailto:me@example.com", "ignored"),
            "me@example.com"
        );
        assert_eq!(email_from_href("#contact", "  me@example.com "), "me@example.com");
    }
}
