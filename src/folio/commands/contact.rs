use crate::commands::{CmdMessage, CmdResult};
use crate::contact::{ContactForm, Screening, STATUS_BLOCKED};
use crate::error::Result;
use tracing::info;

pub fn run(form: &ContactForm) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match form.screen() {
        Screening::Blocked => {
            info!("contact submission blocked by honeypot");
            result.add_message(CmdMessage::warning(STATUS_BLOCKED));
        }
        Screening::Ready(submission) => {
            result.submission = Some(submission);
        }
    }
    Ok(result)
}
