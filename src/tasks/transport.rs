//! Per-invocation transport selection and cancellation.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::config::ShopConnection;
use crate::error::{TaskError, TransportError};
use crate::rest::{RestShopifyApi, ShopifyApi};

/// The transport one task invocation talks to.
///
/// An owned transport is dropped with the handle when the task returns.
pub(crate) enum ApiHandle<'a> {
    Injected(&'a dyn ShopifyApi),
    Owned(RestShopifyApi),
}

impl<'a> ApiHandle<'a> {
    /// Uses the injected transport, or builds a REST one for `connection`.
    pub(crate) fn acquire(
        injected: Option<&'a dyn ShopifyApi>,
        connection: &ShopConnection,
    ) -> Result<Self, TaskError> {
        match injected {
            Some(api) => Ok(Self::Injected(api)),
            None => Ok(Self::Owned(RestShopifyApi::new(connection)?)),
        }
    }

    pub(crate) fn api(&self) -> &dyn ShopifyApi {
        match self {
            Self::Injected(api) => *api,
            Self::Owned(api) => api,
        }
    }
}

/// Races `call` against `cancel`.
///
/// A token that has already fired wins without polling `call`.
pub(crate) async fn cancellable<T, F>(cancel: &CancellationToken, call: F) -> Result<T, TaskError>
where
    F: Future<Output = Result<T, TaskError>>,
{
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(TransportError::Cancelled.into()),
        result = call => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_completed_call_returns_its_result() {
        let cancel = CancellationToken::new();
        let result = cancellable(&cancel, async { Ok::<_, TaskError>(5) }).await;
        assert_eq!(result.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_pre_cancelled_token_skips_call() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = cancellable(&cancel, std::future::pending::<Result<(), TaskError>>()).await;

        assert!(result.unwrap_err().is_cancelled());
    }

    #[tokio::test]
    async fn test_cancel_during_call() {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.cancel();
        });

        let result = cancellable(&cancel, async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<(), TaskError>(())
        })
        .await;

        assert!(result.unwrap_err().is_cancelled());
    }
}
