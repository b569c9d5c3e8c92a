//! Validated newtype wrappers for connection values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ValidationError;
use std::fmt;

/// A validated Shopify Admin API access token.
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use shopify_tasks::AccessToken;
///
/// let token = AccessToken::new("shpat_secret").unwrap();
/// assert_eq!(token.as_ref(), "shpat_secret");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if the token is blank.
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "AccessToken",
            });
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated Shopify shop domain.
///
/// Shop identifiers arrive either as the bare shop name or as the full
/// `myshopify.com` domain; both normalize to the full domain.
///
/// # Accepted Formats
///
/// - `shop-name` - normalized to `shop-name.myshopify.com`
/// - `shop-name.myshopify.com` - used as-is
///
/// # Example
///
/// ```rust
/// use shopify_tasks::ShopDomain;
///
/// let domain = ShopDomain::new("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
///
/// let domain = ShopDomain::new("My-Store.myshopify.com").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for a blank value and
    /// [`ValidationError::InvalidShopDomain`] for anything that is not a
    /// shop name or a `myshopify.com` domain.
    pub fn new(domain: impl Into<String>) -> Result<Self, ValidationError> {
        let domain = domain.into();
        let domain = domain.trim().to_lowercase();

        if domain.is_empty() {
            return Err(ValidationError::MissingField { field: "ShopName" });
        }

        let (shop_name, full_domain) = if let Some(shop_name) = domain.strip_suffix(Self::SUFFIX) {
            (shop_name.to_string(), domain)
        } else if domain.contains('.') {
            return Err(ValidationError::InvalidShopDomain { domain });
        } else {
            (domain.clone(), format!("{}{}", domain, Self::SUFFIX))
        };

        if !Self::is_valid_shop_name(&shop_name) {
            return Err(ValidationError::InvalidShopDomain {
                domain: full_domain,
            });
        }

        Ok(Self {
            shop_name_end: shop_name.len(),
            full_domain,
        })
    }

    /// Returns the shop name portion of the domain.
    ///
    /// For `my-store.myshopify.com`, this returns `my-store`.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }

    fn is_valid_shop_name(name: &str) -> bool {
        if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
            return false;
        }

        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_domain)
    }
}

/// A validated base URL used instead of `https://{shop}`.
///
/// Requests are routed through this host while the shop domain is still
/// used for everything else. Trailing slashes are stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost(String);

impl ApiHost {
    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidApiHost`] if the value does not
    /// start with `http://` or `https://` or has no host part.
    pub fn new(url: impl Into<String>) -> Result<Self, ValidationError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match host {
            Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ValidationError::InvalidApiHost { url }),
        }
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_blank() {
        assert_eq!(
            AccessToken::new("   "),
            Err(ValidationError::MissingField {
                field: "AccessToken"
            })
        );
    }

    #[test]
    fn test_access_token_debug_is_masked() {
        let token = AccessToken::new("shpat_123").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("shpat_123"));
        assert_eq!(debug, "AccessToken(*****)");
    }

    #[test]
    fn test_shop_domain_normalizes_short_name() {
        let domain = ShopDomain::new("  test-shop ").unwrap();
        assert_eq!(domain.as_ref(), "test-shop.myshopify.com");
        assert_eq!(domain.shop_name(), "test-shop");
    }

    #[test]
    fn test_shop_domain_accepts_full_domain() {
        let domain = ShopDomain::new("test-shop.myshopify.com").unwrap();
        assert_eq!(domain.as_ref(), "test-shop.myshopify.com");
        assert_eq!(domain.to_string(), "test-shop.myshopify.com");
    }

    #[test]
    fn test_shop_domain_blank_is_missing() {
        assert_eq!(
            ShopDomain::new(""),
            Err(ValidationError::MissingField { field: "ShopName" })
        );
    }

    #[test]
    fn test_shop_domain_rejects_foreign_domains_and_bad_names() {
        assert!(matches!(
            ShopDomain::new("shop.example.com"),
            Err(ValidationError::InvalidShopDomain { .. })
        ));
        assert!(matches!(
            ShopDomain::new("-shop"),
            Err(ValidationError::InvalidShopDomain { .. })
        ));
        assert!(matches!(
            ShopDomain::new("shop_name"),
            Err(ValidationError::InvalidShopDomain { .. })
        ));
    }

    #[test]
    fn test_api_host_strips_trailing_slash() {
        let host = ApiHost::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(host.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_api_host_requires_scheme() {
        assert!(matches!(
            ApiHost::new("proxy.example.com"),
            Err(ValidationError::InvalidApiHost { .. })
        ));
        assert!(matches!(
            ApiHost::new("https://"),
            Err(ValidationError::InvalidApiHost { .. })
        ));
    }
}
