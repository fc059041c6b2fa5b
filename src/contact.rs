//! Contact and QSL request form
//!
//! Holds the form fields, validates them, and submits them to the backend.
//! Widgets are left to the consumer; this is the submission interface.

use crate::api::{ApiClient, ContactSubmission};
use crate::error::ContactError;
use regex::Regex;
use std::sync::OnceLock;

/// Shown when the backend accepts a submission without a message
pub const SUBMIT_SUCCESS_FALLBACK: &str = "Message sent successfully!";

/// Shown when the backend answers `success: false` without an error
pub const SUBMIT_REJECTED_FALLBACK: &str = "Failed to send message";

/// Shown when the request itself fails without an error body
pub const SUBMIT_FAILURE_FALLBACK: &str = "Failed to send message. Please try again.";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Trimmed value, or `None` when blank
fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Contact / QSL request form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub callsign: String,
    pub message: String,

    /// Whether this is a QSL card request
    pub qsl_request: bool,

    // QSO details for QSL requests
    pub frequency: String,
    pub mode: String,
    pub rst_sent: String,
    pub rst_received: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check required fields and the email address
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField { field });
            }
        }

        let email = self.email.trim();
        if !email_pattern().is_match(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    /// Request body; blank optional fields are left out
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            callsign: optional(&self.callsign).map(|c| c.to_uppercase()),
            message: self.message.trim().to_string(),
            qsl_request: self.qsl_request,
            frequency: optional(&self.frequency),
            mode: optional(&self.mode),
            rst_sent: optional(&self.rst_sent),
            rst_received: optional(&self.rst_received),
        }
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate and send the form
    ///
    /// On success the form is cleared and the server's confirmation returned.
    /// On failure the form is kept so the user can retry.
    pub async fn submit(&mut self, client: &ApiClient) -> Result<String, ContactError> {
        self.validate()?;

        match client.submit_contact(&self.to_submission()).await {
            Ok(response) if response.data.success => {
                let message = response
                    .data
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| SUBMIT_SUCCESS_FALLBACK.to_string());
                log::info!(
                    "Contact request submitted{}",
                    response.data.id.map(|id| format!(" ({})", id)).unwrap_or_default()
                );
                self.reset();
                Ok(message)
            }
            Ok(response) => Err(ContactError::Rejected(
                response
                    .data
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| SUBMIT_REJECTED_FALLBACK.to_string()),
            )),
            Err(err) => {
                log::error!("Contact form error: {}", err);
                Err(ContactError::Rejected(
                    err.payload
                        .as_ref()
                        .and_then(|p| p.message())
                        .unwrap_or_else(|| SUBMIT_FAILURE_FALLBACK.to_string()),
                ))
            }
        }
    }
}
