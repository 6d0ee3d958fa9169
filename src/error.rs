use std::collections::HashMap;
use thiserror::Error;

/// Fallback shown when the server did not supply a usable error message.
pub const GENERIC_SUBMISSION_ERROR: &str = "Booking could not be submitted. Please try again.";

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Booking rejected: {message}")]
    Submission {
        message: String,
        form_errors: HashMap<String, String>,
    },
    #[error("Invalid wizard action: {0}")]
    Step(String),
}

impl WizardError {
    /// Message safe to surface inline in the wizard. Server rejections pass
    /// through verbatim; transport failures collapse to a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            WizardError::Submission { message, .. } => message.clone(),
            WizardError::Validation(msg) | WizardError::Step(msg) => msg.clone(),
            WizardError::Http(_) | WizardError::Api { .. } => GENERIC_SUBMISSION_ERROR.to_string(),
        }
    }

    pub fn form_errors(&self) -> Option<&HashMap<String, String>> {
        match self {
            WizardError::Submission { form_errors, .. } => Some(form_errors),
            _ => None,
        }
    }
}
