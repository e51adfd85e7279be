use crate::transport::TransportError;

pub const MSG_NOT_CONFIGURED: &str =
    "Email service is not fully configured. Please contact the site owner.";
pub const MSG_MISSING_FIELD: &str = "Please fill in all fields.";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_NETWORK: &str = "Network error. Please check your connection and try again.";
pub const MSG_CLIENT: &str = "Invalid request. Please check your information and try again.";
pub const MSG_SERVER: &str = "Server error. Please try again later.";
pub const MSG_FALLBACK: &str = "Failed to send message. Please try again later.";
pub const MSG_SUCCESS: &str = "Thank you! I'll get back to you soon.";

/// Why a submission attempt failed, in the order the checks run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// Transport credentials unset or still placeholders. Checked before any I/O.
    #[error("email transport is not configured")]
    NotConfigured,
    #[error("one or more fields are empty")]
    MissingField,
    #[error("email address is malformed")]
    InvalidEmail,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportFailure {
    /// No HTTP response was received.
    Network,
    Client,
    Server,
    Other,
}

impl TransportFailure {
    pub fn classify(err: &TransportError) -> Self {
        match err.status {
            None | Some(0) => TransportFailure::Network,
            Some(400..=499) => TransportFailure::Client,
            Some(s) if s >= 500 => TransportFailure::Server,
            Some(_) => TransportFailure::Other,
        }
    }
}

impl ContactError {
    /// Only transport failures are worth retrying unchanged; the rest need
    /// either an edit or an operator.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ContactError::Transport(_))
    }

    /// Text shown under the form.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::NotConfigured => MSG_NOT_CONFIGURED.to_string(),
            ContactError::MissingField => MSG_MISSING_FIELD.to_string(),
            ContactError::InvalidEmail => MSG_INVALID_EMAIL.to_string(),
            ContactError::Transport(err) => match TransportFailure::classify(err) {
                TransportFailure::Network => MSG_NETWORK.to_string(),
                TransportFailure::Client => MSG_CLIENT.to_string(),
                TransportFailure::Server => MSG_SERVER.to_string(),
                TransportFailure::Other => err
                    .text
                    .as_deref()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .unwrap_or(MSG_FALLBACK)
                    .to_string(),
            },
        }
    }
}
