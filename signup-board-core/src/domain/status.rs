use crate::api::{ApiError, DEFAULT_REJECTION};

/// How long a status message stays visible before auto-hiding, in milliseconds
pub const STATUS_VISIBLE_MS: u32 = 5_000;

/// Visual severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// CSS modifier used by the status banner
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// Transient feedback shown after a mutation, auto-hidden after
/// [`STATUS_VISIBLE_MS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

/// What the view layer must do after a signup or unregister attempt.
///
/// A successful mutation shows the server message, clears the form, and
/// triggers exactly one snapshot reload. A failed one shows the error and
/// leaves both the form and the rendered snapshot untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub status: StatusMessage,
    pub reload: bool,
    pub clear_form: bool,
}

impl MutationOutcome {
    /// Fold a mutation result into its UI effects.
    ///
    /// `transport_fallback` is the operation-specific generic text shown for
    /// transport or parse failures, distinguishable from server-reported
    /// errors, which surface their `detail` verbatim.
    pub fn evaluate(result: Result<String, ApiError>, transport_fallback: &str) -> Self {
        match result {
            Ok(message) => Self {
                status: StatusMessage::success(message),
                reload: true,
                clear_form: true,
            },
            Err(ApiError::Rejected { detail }) => Self {
                status: StatusMessage::error(
                    detail.unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
                ),
                reload: false,
                clear_form: false,
            },
            Err(_) => Self {
                status: StatusMessage::error(transport_fallback),
                reload: false,
                clear_form: false,
            },
        }
    }
}
