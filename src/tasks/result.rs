//! The result object every task hands back to the host.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::TaskError;

/// Details of a failed task in return mode.
#[derive(Debug)]
pub struct ErrorInfo {
    /// The composed message, including any custom prefix.
    pub message: String,
    /// The failure that caused it.
    pub additional_info: TaskError,
}

impl Serialize for ErrorInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ErrorInfo", 2)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("additional_info", &self.additional_info.to_string())?;
        state.end()
    }
}

/// Outcome of a task: either its payload or a description of the failure.
///
/// Serializes to the host's result shape:
///
/// ```rust
/// use shopify_tasks::tasks::TaskResult;
/// use serde_json::json;
///
/// let result: TaskResult<u32> = TaskResult::Success(7);
/// assert_eq!(
///     serde_json::to_value(&result).unwrap(),
///     json!({"success": true, "data": 7, "error": null})
/// );
/// ```
#[derive(Debug)]
pub enum TaskResult<T> {
    /// The call succeeded.
    Success(T),
    /// The call failed and the policy asked for a result instead of an error.
    Failure(ErrorInfo),
}

impl<T> TaskResult<T> {
    /// Returns `true` for [`TaskResult::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the payload of a successful result.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Returns the error details of a failed result.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Success(_) => None,
            Self::Failure(info) => Some(info),
        }
    }

    /// Consumes the result and returns the payload, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }
}

impl<T: Serialize> Serialize for TaskResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TaskResult", 3)?;
        state.serialize_field("success", &self.is_success())?;
        state.serialize_field("data", &self.data())?;
        state.serialize_field("error", &self.error())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use serde_json::json;

    fn failure() -> TaskResult<u32> {
        TaskResult::Failure(ErrorInfo {
            message: "Lookup failed: ProductId is required".to_string(),
            additional_info: ValidationError::MissingField { field: "ProductId" }.into(),
        })
    }

    #[test]
    fn test_exactly_one_side_is_populated() {
        let success: TaskResult<u32> = TaskResult::Success(1);
        assert!(success.data().is_some() && success.error().is_none());

        let failed = failure();
        assert!(failed.data().is_none() && failed.error().is_some());
        assert!(!failed.is_success());
    }

    #[test]
    fn test_failure_serializes_error_object() {
        assert_eq!(
            serde_json::to_value(failure()).unwrap(),
            json!({
                "success": false,
                "data": null,
                "error": {
                    "message": "Lookup failed: ProductId is required",
                    "additional_info": "ProductId is required"
                }
            })
        );
    }

    #[test]
    fn test_unit_success_serializes_null_data() {
        let result: TaskResult<()> = TaskResult::Success(());
        assert_eq!(
            serde_json::to_value(result).unwrap(),
            json!({"success": true, "data": null, "error": null})
        );
    }
}
