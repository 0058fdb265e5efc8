use crate::commands::{CmdMessage, CmdResult};
use crate::contact::email_from_href;
use crate::error::Result;

pub const STATUS_NO_ADDRESS: &str = "No email address in link.";

/// Resolves the address behind a contact link so it can be copied.
pub fn run(href: &str, text: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let address = email_from_href(href.trim(), text);
    if address.is_empty() {
        result.add_message(CmdMessage::warning(STATUS_NO_ADDRESS));
    } else {
        result.email = Some(address);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_link_yields_address() {
        let result = run(" mailto:ada@example.com", "").unwrap();
        assert_eq!(result.email.as_deref(), Some("ada@example.com"));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn other_links_fall_back_to_text() {
        let result = run("#contact", " ada@example.com ").unwrap();
        assert_eq!(result.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn nothing_to_copy_warns() {
        let result = run("#contact", "   ").unwrap();
        assert!(result.email.is_none());
        assert_eq!(result.messages[0].content, STATUS_NO_ADDRESS);
    }
}
