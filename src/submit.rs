//! Login submission flow.
//!
//! DESIGN
//! ======
//! The transport reports success for the whole 2xx class, and the
//! submitter re-checks for exactly 200 before navigating. Both checks are
//! kept: a success-class response that is not 200 gets its own generic
//! retry message, while everything the transport reports as an error gets
//! the credentials-focused one. There is no in-flight guard, no retry,
//! and no cancellation: every call is an independent attempt and a failed
//! attempt leaves no state behind.

use std::sync::Arc;

use crate::client::{LoginError, LoginTransport};
use crate::config::AppConfig;
use crate::form::FormSource;
use crate::nav::Navigator;
use crate::notify::Notifier;

/// Shown when the server answered in the success class but not with 200.
pub const MSG_UNEXPECTED_STATUS: &str = "Login failed. Please try again.";
/// Shown when the transport reported the attempt as failed.
pub const MSG_REQUEST_FAILED: &str = "Login failed. Please check your credentials and try again.";

/// Completion of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Exact-200 response; the navigator was invoked with the target URL.
    Redirected { status: u16 },
    /// Any other outcome; the notifier was invoked with `message`.
    Rejected { message: &'static str },
}

/// Triggers one login attempt and reacts to its outcome.
pub struct LoginSubmitter {
    config: AppConfig,
    transport: Arc<dyn LoginTransport>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl LoginSubmitter {
    #[must_use]
    pub fn new(
        config: AppConfig,
        transport: Arc<dyn LoginTransport>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { config, transport, notifier, navigator }
    }

    /// Run one login attempt from the current state of `source`.
    ///
    /// Reads the form at call time (no validation), posts it, then either
    /// navigates to the protected path or notifies with one of the two
    /// fixed messages. A form-source read failure is surfaced like a
    /// transport failure: the attempt cannot proceed.
    pub async fn submit_login_form(&self, source: &dyn FormSource) -> SubmitOutcome {
        let form = match source.read_form() {
            Ok(form) => form,
            Err(e) => {
                tracing::error!(error = %e, "form read failed");
                return self.reject(MSG_REQUEST_FAILED);
            }
        };

        tracing::debug!(fields = form.fields().len(), "submitting login form");
        match self.transport.post_login(&self.config.base_url, &form).await {
            Ok(response) if response.status == 200 => {
                let target = format!("{}{}", self.config.base_url, self.config.protected_path);
                tracing::info!(%target, "login succeeded, navigating");
                self.navigator.navigate(&target);
                SubmitOutcome::Redirected { status: response.status }
            }
            Ok(response) => {
                tracing::warn!(status = response.status, "unexpected success status");
                self.reject(MSG_UNEXPECTED_STATUS)
            }
            Err(LoginError::Rejected { status }) => {
                tracing::warn!(status, "login rejected");
                self.reject(MSG_REQUEST_FAILED)
            }
            Err(e) => {
                tracing::error!(error = %e, "login request failed");
                self.reject(MSG_REQUEST_FAILED)
            }
        }
    }

    fn reject(&self, message: &'static str) -> SubmitOutcome {
        self.notifier.notify(message);
        SubmitOutcome::Rejected { message }
    }
}

#[cfg(test)]
#[path = "submit_test.rs"]
mod tests;
