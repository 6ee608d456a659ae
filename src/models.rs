// src/models.rs
use serde::Deserialize;

/// Username/password pair as submitted through the form. Transient: it
/// exists in the request body and as the success-handler payload, nothing
/// is ever persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Inline validation messages, one slot per form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Lifecycle of a single submit attempt. `Failed` carries the message shown
/// above the submit control; the form is otherwise back to rest and can be
/// resubmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

/// Render model for the login form: current field values, inline errors,
/// the submission lifecycle, and an optional success notice.
#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub values: Credentials,
    pub field_errors: FieldErrors,
    pub state: SubmissionState,
    pub notice: Option<String>,
}

impl LoginFormState {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn with_values(values: Credentials) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Starts a new attempt. Clears leftovers from the previous attempt
    /// (field errors, failure message, notice). Returns false without any
    /// effect while an attempt is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.field_errors = FieldErrors::default();
        self.notice = None;
        self.state = SubmissionState::Submitting;
        true
    }

    /// Resolves the in-flight attempt with a top-level error message.
    /// Field values are kept as-is so the user can correct and resubmit.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = SubmissionState::Failed(message.into());
    }

    /// Resolves the in-flight attempt successfully, returning to rest.
    pub fn finish(&mut self) {
        self.state = SubmissionState::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    pub fn submit_error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
