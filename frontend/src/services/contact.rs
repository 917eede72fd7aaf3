use shared::{ContactError, ContactSubmission};

use super::logging::Logger;

/// Where contact form submissions go. The portfolio ships without one.
pub trait SubmissionBackend {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

/// Stand-in used until a real backend is wired up: every submission is
/// refused with `BackendUnavailable`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnwiredBackend;

impl SubmissionBackend for UnwiredBackend {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        submission.check_required()?;
        Logger::warn_with_component(
            "contact",
            &format!("dropping message from {}: no submission backend", submission.email),
        );
        Err(ContactError::BackendUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_submission_rejected_before_backend() {
        // Returns before logging, so safe off-browser
        let result = UnwiredBackend.submit(&ContactSubmission::new("", "a@b.c", "hi"));
        assert_eq!(result, Err(ContactError::MissingField("name")));
    }
}
