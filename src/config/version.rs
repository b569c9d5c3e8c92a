//! Shopify API version handling.
//!
//! This module provides the [`ApiVersion`] type used in every Admin REST path.

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Shopify API version.
///
/// Shopify releases new API versions quarterly (January, April, July, October).
/// Versions are carried as validated strings so connections configured for a
/// release newer than this crate still work.
///
/// # Example
///
/// ```rust
/// use shopify_tasks::ApiVersion;
///
/// let version: ApiVersion = "2024-10".parse().unwrap();
/// assert_eq!(version.to_string(), "2024-10");
/// assert!(version.is_stable());
///
/// let unstable: ApiVersion = "unstable".parse().unwrap();
/// assert!(!unstable.is_stable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// A quarterly release in `YYYY-MM` form.
    Stable(String),
    /// Unstable API version for development and testing.
    Unstable,
}

impl ApiVersion {
    /// The version used when a list task is given no explicit version.
    pub const LATEST: &'static str = "2025-10";

    /// Returns the latest stable API version known to this crate.
    #[must_use]
    pub fn latest() -> Self {
        Self::Stable(Self::LATEST.to_string())
    }

    /// Returns `true` for quarterly releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Stable(_))
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            && matches!(month, "01" | "04" | "07" | "10")
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable(version) => f.write_str(version),
            Self::Unstable => f.write_str("unstable"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        if s.is_empty() {
            return Err(ValidationError::MissingField {
                field: "ApiVersion",
            });
        }
        if s == "unstable" {
            return Ok(Self::Unstable);
        }
        if Self::is_valid_version_format(&s) {
            Ok(Self::Stable(s))
        } else {
            Err(ValidationError::InvalidApiVersion { version: s })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quarterly_versions() {
        for raw in ["2023-10", "2024-01", "2024-04", "2024-07", "2025-10"] {
            let version: ApiVersion = raw.parse().unwrap();
            assert_eq!(version.to_string(), raw);
        }
    }

    #[test]
    fn test_parse_is_case_and_whitespace_insensitive() {
        let version: ApiVersion = " UNSTABLE ".parse().unwrap();
        assert_eq!(version, ApiVersion::Unstable);
    }

    #[test]
    fn test_blank_version_is_missing() {
        assert_eq!(
            "  ".parse::<ApiVersion>(),
            Err(ValidationError::MissingField {
                field: "ApiVersion"
            })
        );
    }

    #[test]
    fn test_invalid_versions_are_rejected() {
        for raw in ["2024-02", "24-01", "2024-1", "latest", "2024/01"] {
            assert!(
                matches!(
                    raw.parse::<ApiVersion>(),
                    Err(ValidationError::InvalidApiVersion { .. })
                ),
                "expected {raw} to be rejected"
            );
        }
    }

    #[test]
    fn test_latest_is_stable() {
        assert!(ApiVersion::latest().is_stable());
        assert_eq!(ApiVersion::latest().to_string(), ApiVersion::LATEST);
    }
}
