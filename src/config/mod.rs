//! Connection parameters for the Shopify connector tasks.
//!
//! The host platform hands every task a raw [`Connection`] made of plain
//! strings. Before any request is built the task validates it into a
//! [`ShopConnection`], whose fields are validated newtypes:
//!
//! - [`ShopDomain`]: the normalized `*.myshopify.com` domain
//! - [`AccessToken`]: the Admin API token, masked in debug output
//! - [`ApiVersion`]: the Admin API version used in every path
//! - [`ApiHost`]: an optional base URL override
//!
//! # Example
//!
//! ```rust
//! use shopify_tasks::config::{Connection, VersionRequirement};
//!
//! let connection = Connection::new("my-store", "shpat_token", "2024-10");
//! let shop = connection.validate(VersionRequirement::Required).unwrap();
//!
//! assert_eq!(shop.base_uri(), "https://my-store.myshopify.com");
//! assert_eq!(shop.base_path(), "/admin/api/2024-10");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApiHost, ShopDomain};
pub use version::ApiVersion;

use std::fmt;

use serde::Deserialize;

use crate::error::ValidationError;

/// Environment variable holding the shop name for [`Connection::from_env`].
pub const SHOP_NAME_ENV: &str = "SHOPIFY_SHOP_NAME";
/// Environment variable holding the access token for [`Connection::from_env`].
pub const ACCESS_TOKEN_ENV: &str = "SHOPIFY_ACCESS_TOKEN";
/// Environment variable holding the API version for [`Connection::from_env`].
pub const API_VERSION_ENV: &str = "SHOPIFY_API_VERSION";

/// Whether a task needs an explicit API version.
///
/// The product and single-customer tasks require one. The list tasks
/// connect with a shop and token only and fall back to
/// [`ApiVersion::latest`] when the version is blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionRequirement {
    /// A blank version fails validation.
    Required,
    /// A blank version is replaced by [`ApiVersion::latest`].
    DefaultToLatest,
}

/// Raw connection parameters as supplied by the host platform.
///
/// All fields default to empty so partially filled JSON still
/// deserializes; emptiness is reported by [`Connection::validate`].
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Connection {
    /// Shop name (`my-store`) or full domain (`my-store.myshopify.com`).
    #[serde(alias = "shop_name", alias = "shop_domain")]
    pub shop: String,
    /// Admin API access token from a custom app or OAuth.
    pub access_token: String,
    /// Admin API version, e.g. `2024-10`.
    pub api_version: String,
    /// Optional base URL that replaces `https://{shop}`.
    pub api_host: Option<String>,
}

impl Connection {
    /// Creates a connection from its three required values.
    #[must_use]
    pub fn new(
        shop: impl Into<String>,
        access_token: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            shop: shop.into(),
            access_token: access_token.into(),
            api_version: api_version.into(),
            api_host: None,
        }
    }

    /// Routes requests through `api_host` instead of the shop's own domain.
    #[must_use]
    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = Some(api_host.into());
        self
    }

    /// Reads a connection from `SHOPIFY_SHOP_NAME`, `SHOPIFY_ACCESS_TOKEN`
    /// and `SHOPIFY_API_VERSION`.
    ///
    /// Unset variables become empty strings; validation reports them.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a connection from an arbitrary key lookup.
    ///
    /// This is what [`from_env`](Self::from_env) delegates to.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            shop: lookup(SHOP_NAME_ENV).unwrap_or_default(),
            access_token: lookup(ACCESS_TOKEN_ENV).unwrap_or_default(),
            api_version: lookup(API_VERSION_ENV).unwrap_or_default(),
            api_host: None,
        }
    }

    /// Validates the connection, stopping at the first failure.
    ///
    /// Fields are checked in a fixed order: shop, access token, API version.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] naming the first blank
    /// field, or the matching format error for a malformed one.
    pub fn validate(
        &self,
        requirement: VersionRequirement,
    ) -> Result<ShopConnection, ValidationError> {
        let shop = ShopDomain::new(self.shop.as_str())?;
        let access_token = AccessToken::new(self.access_token.as_str())?;

        let api_version = match requirement {
            VersionRequirement::DefaultToLatest if self.api_version.trim().is_empty() => {
                ApiVersion::latest()
            }
            _ => self.api_version.parse()?,
        };

        let api_host = self
            .api_host
            .as_deref()
            .filter(|host| !host.trim().is_empty())
            .map(ApiHost::new)
            .transpose()?;

        Ok(ShopConnection {
            shop,
            access_token,
            api_version,
            api_host,
        })
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("shop", &self.shop)
            .field("access_token", &"*****")
            .field("api_version", &self.api_version)
            .field("api_host", &self.api_host)
            .finish()
    }
}

/// A validated connection, ready for building requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopConnection {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    api_host: Option<ApiHost>,
}

impl ShopConnection {
    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the base URI requests are sent to.
    ///
    /// This is the `api_host` override when set, otherwise `https://{shop}`.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.shop.as_ref()),
            |host| host.as_ref().to_string(),
        )
    }

    /// Returns the versioned Admin REST base path.
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/admin/api/{}", self.api_version)
    }
}

// Verify ShopConnection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopConnection>();
};
