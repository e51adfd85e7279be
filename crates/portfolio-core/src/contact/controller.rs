//! Submission state machine for the contact form.
//!
//! The controller never sleeps or spawns. Entering `Succeeded` or `Failed`
//! hands back a [`DismissTicket`]; the host schedules it and calls
//! [`ContactController::dismiss`] when the delay elapses. Every state change
//! advances an epoch, so a ticket issued for an older state is ignored.

use super::error::ContactError;
use super::fields::{ContactFields, FieldName};
use super::validation::validate;
use crate::config::{EmailJsConfig, FALLBACK_SITE_NAME};
use crate::transport::{
    EmailRequest, EmailTransport, TemplateParams, TransportError, TransportResponse,
};
use std::time::Duration;

/// How long success and error banners stay up.
pub const MESSAGE_DISPLAY_DURATION: Duration = Duration::from_secs(5);

// Same shape as a browser's en-US `toLocaleString()`.
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

// The error lives inside the failed state so it can never coexist with success.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Status {
    Idle,
    Submitting,
    Succeeded,
    Failed(ContactError),
}

/// Scheduled auto-dismiss for the banner of one particular state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissTicket {
    epoch: u64,
    pub delay: Duration,
}

/// Extra template variables synthesized at submission time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionMetadata {
    pub website_url: String,
    pub timestamp: String,
}

impl SubmissionMetadata {
    pub fn new(website_url: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            website_url: website_url.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Stamp with the current local time. A missing or blank origin falls back
    /// to the site name.
    pub fn now(origin: Option<&str>) -> Self {
        let website_url = origin
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .unwrap_or(FALLBACK_SITE_NAME);
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::new(website_url, timestamp)
    }
}

/// Result of trying to start a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStart {
    /// A submission is in flight or the success banner is still showing.
    Ignored,
    /// Failed a local check; the form is now `Failed`.
    Rejected(DismissTicket),
    /// Checks passed; hand this to the transport, then call `finish_submit`.
    Send(EmailRequest),
}

pub struct ContactController {
    config: EmailJsConfig,
    fields: ContactFields,
    status: Status,
    epoch: u64,
}

impl ContactController {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            config,
            fields: ContactFields::default(),
            status: Status::Idle,
            epoch: 0,
        }
    }

    pub fn config(&self) -> &EmailJsConfig {
        &self.config
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> SubmissionPhase {
        match self.status {
            Status::Idle => SubmissionPhase::Idle,
            Status::Submitting => SubmissionPhase::Submitting,
            Status::Succeeded => SubmissionPhase::Succeeded,
            Status::Failed(_) => SubmissionPhase::Failed,
        }
    }

    pub fn error(&self) -> Option<&ContactError> {
        match &self.status {
            Status::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(ContactError::user_message)
    }

    pub fn is_submitted(&self) -> bool {
        self.status == Status::Succeeded
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        matches!(self.status, Status::Idle | Status::Failed(_))
    }

    fn transition(&mut self, status: Status) {
        self.status = status;
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn ticket(&self) -> DismissTicket {
        DismissTicket {
            epoch: self.epoch,
            delay: MESSAGE_DISPLAY_DURATION,
        }
    }

    fn fail(&mut self, err: ContactError) -> DismissTicket {
        log::warn!("[contact] submission failed: {}", err);
        self.transition(Status::Failed(err));
        self.ticket()
    }

    /// Store a keystroke. Editing dismisses a pending error.
    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.fields.set(field, value);
        if matches!(self.status, Status::Failed(_)) {
            self.transition(Status::Idle);
        }
    }

    /// Run the local checks and, if they pass, build the outbound request.
    pub fn begin_submit(&mut self, metadata: SubmissionMetadata) -> SubmitStart {
        if matches!(self.status, Status::Submitting | Status::Succeeded) {
            log::debug!("[contact] submit ignored in phase {:?}", self.phase());
            return SubmitStart::Ignored;
        }
        self.transition(Status::Submitting);

        if !self.config.is_configured() {
            return SubmitStart::Rejected(self.fail(ContactError::NotConfigured));
        }
        let trimmed = match validate(&self.fields) {
            Ok(t) => t,
            Err(err) => return SubmitStart::Rejected(self.fail(err)),
        };

        let params = TemplateParams {
            name: trimmed.name,
            email: trimmed.email,
            message: trimmed.message,
            website_url: metadata.website_url,
            timestamp: metadata.timestamp,
        };
        log::info!("[contact] sending message from {}", params.email);
        SubmitStart::Send(EmailRequest::new(&self.config, params))
    }

    /// Apply the transport's answer. Returns `None` if no submission was in flight.
    pub fn finish_submit(
        &mut self,
        result: Result<TransportResponse, TransportError>,
    ) -> Option<DismissTicket> {
        if self.status != Status::Submitting {
            log::warn!("[contact] transport result arrived in phase {:?}", self.phase());
            return None;
        }
        let outcome = result.and_then(|response| {
            if response.is_ok() {
                Ok(())
            } else {
                Err(TransportError::unacknowledged(&response))
            }
        });
        match outcome {
            Ok(()) => {
                log::info!("[contact] message sent");
                self.fields.clear();
                self.transition(Status::Succeeded);
                Some(self.ticket())
            }
            Err(err) => {
                log::error!("[contact] email transport error: {}", err);
                Some(self.fail(ContactError::Transport(err)))
            }
        }
    }

    /// One full attempt. Returns the ticket for the banner it leaves showing.
    pub async fn submit<T: EmailTransport + ?Sized>(
        &mut self,
        transport: &T,
        metadata: SubmissionMetadata,
    ) -> Option<DismissTicket> {
        match self.begin_submit(metadata) {
            SubmitStart::Ignored => None,
            SubmitStart::Rejected(ticket) => Some(ticket),
            SubmitStart::Send(request) => {
                let result = transport.send(&request).await;
                self.finish_submit(result)
            }
        }
    }

    /// Clear the banner the ticket was issued for. Stale tickets do nothing.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        match self.status {
            Status::Succeeded | Status::Failed(_) => {
                self.transition(Status::Idle);
                true
            }
            _ => false,
        }
    }
}
