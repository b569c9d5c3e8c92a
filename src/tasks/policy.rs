//! Throw-or-return handling of task failures.
//!
//! Every task funnels its outcome through [`ErrorPolicy::apply`]. The
//! policy decides whether a failure propagates as [`TaskFailure`] or comes
//! back as [`TaskResult::Failure`]. Either way the message is composed the
//! same way: an optional custom prefix followed by the failure's own text.

use serde::Deserialize;
use thiserror::Error;

use crate::error::TaskError;
use crate::tasks::{ErrorInfo, TaskResult};

/// Caller-selected failure handling, shared by every task's options.
///
/// # Example
///
/// ```rust
/// use shopify_tasks::tasks::ErrorPolicy;
///
/// let policy: ErrorPolicy = serde_json::from_str(
///     r#"{"throw_error_on_failure": false, "error_message_on_failure": "Sync failed:"}"#,
/// ).unwrap();
/// assert!(!policy.throw_error_on_failure);
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorPolicy {
    /// Propagate failures as `Err` instead of returning them.
    pub throw_error_on_failure: bool,
    /// Text placed before the failure's own message.
    pub error_message_on_failure: Option<String>,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self {
            throw_error_on_failure: true,
            error_message_on_failure: None,
        }
    }
}

impl ErrorPolicy {
    /// A policy that returns failures as [`TaskResult::Failure`].
    #[must_use]
    pub const fn returning() -> Self {
        Self {
            throw_error_on_failure: false,
            error_message_on_failure: None,
        }
    }

    /// Sets the custom message prefix.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.error_message_on_failure = Some(message.into());
        self
    }

    /// Builds the message reported for `error`.
    #[must_use]
    pub fn compose_message(&self, error: &TaskError) -> String {
        let original = error.to_string();
        let custom = self
            .error_message_on_failure
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();

        if custom.is_empty() {
            original
        } else {
            format!("{custom} {original}").trim().to_string()
        }
    }

    /// Converts a task outcome according to this policy.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFailure`] when the outcome failed and the policy throws.
    pub fn apply<T>(&self, outcome: Result<T, TaskError>) -> Result<TaskResult<T>, TaskFailure> {
        let error = match outcome {
            Ok(data) => return Ok(TaskResult::Success(data)),
            Err(error) => error,
        };

        let message = self.compose_message(&error);

        if self.throw_error_on_failure {
            return Err(TaskFailure {
                message,
                source: error,
            });
        }

        tracing::warn!(error = %error, "Shopify task failed: {}", message);
        Ok(TaskResult::Failure(ErrorInfo {
            message,
            additional_info: error,
        }))
    }
}

/// A task failure propagated in throw mode.
///
/// Displays the composed message; [`source`](std::error::Error::source)
/// is the underlying [`TaskError`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TaskFailure {
    message: String,
    #[source]
    source: TaskError,
}

impl TaskFailure {
    /// Returns the composed message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the underlying failure.
    #[must_use]
    pub const fn cause(&self) -> &TaskError {
        &self.source
    }

    /// Consumes the failure and returns the underlying error.
    #[must_use]
    pub fn into_cause(self) -> TaskError {
        self.source
    }
}
