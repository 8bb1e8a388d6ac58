//! HTTP collaborators for remote fetching
//!
//! The core never talks to the network directly: it goes through the
//! [`HttpFetch`] trait, which makes timeouts, proxies, and caching the
//! caller's concern and lets tests substitute canned responses.

use crate::error::{Error, Result};
use moka::future::Cache;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// HTTP client abstraction for fetching remote resources
///
/// Implementations fetch the URL with a single GET and return the
/// response body bytes. Timeout and cancellation policy belong to the
/// implementation; a timed-out fetch surfaces as an ordinary error.
///
/// # Errors
///
/// Error messages should follow the pattern `"component: description"`
/// (e.g., `"network: connection failed"`, `"http: status 404"`).
pub trait HttpFetch: Send + Sync {
    /// Fetch the URL and return the response body
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>>;
}

impl HttpFetch for reqwest::Client {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
        Box::pin(async move {
            let response = self
                .get(url)
                .send()
                .await
                .map_err(|e| Error::RemoteError(format!("network: {e}")))?;

            if !response.status().is_success() {
                return Err(Error::RemoteError(format!(
                    "http: status {}",
                    response.status()
                )));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| Error::RemoteError(format!("network: {e}")))?;

            Ok(bytes.to_vec())
        })
    }
}

/// TTL-caching wrapper around any [`HttpFetch`]
///
/// Successful responses are cached per URL; errors are never cached.
/// This is the HTTP-layer cache for key-set endpoints, kept outside the
/// verification core.
#[derive(Clone)]
pub struct CachedFetch<F> {
    inner: F,
    cache: Cache<String, Vec<u8>>,
}

impl<F: HttpFetch> CachedFetch<F> {
    /// Wrap a fetcher with the default 300-second TTL
    pub fn new(inner: F) -> Self {
        Self::with_ttl(inner, Duration::from_secs(300))
    }

    /// Wrap a fetcher with a custom TTL
    pub fn with_ttl(inner: F, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(64)
                .build(),
        }
    }
}

impl<F: HttpFetch> HttpFetch for CachedFetch<F> {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
        Box::pin(async move {
            if let Some(hit) = self.cache.get(url).await {
                tracing::debug!(url, "key set served from cache");
                return Ok(hit);
            }

            let bytes = self.inner.fetch(url).await?;
            self.cache.insert(url.to_string(), bytes.clone()).await;
            Ok(bytes)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct CountingFetch {
        count: Arc<AtomicU32>,
    }

    impl HttpFetch for CountingFetch {
        fn fetch<'a>(
            &'a self,
            _url: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
            let count = self.count.clone();
            Box::pin(async move {
                count.fetch_add(1, Ordering::SeqCst);
                Ok(b"{\"keys\":[]}".to_vec())
            })
        }
    }

    struct FailingFetch;

    impl HttpFetch for FailingFetch {
        fn fetch<'a>(
            &'a self,
            _url: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
            Box::pin(async move { Err(Error::RemoteError("network: unreachable".into())) })
        }
    }

    #[tokio::test]
    async fn test_cached_fetch_hits_inner_once() {
        let count = Arc::new(AtomicU32::new(0));
        let cached = CachedFetch::new(CountingFetch {
            count: count.clone(),
        });

        let uri = "https://issuer.example/jwks.json";

        let first = cached.fetch(uri).await.expect("fetch");
        assert_eq!(count.load(Ordering::SeqCst), 1);

        let second = cached.fetch(uri).await.expect("fetch");
        assert_eq!(count.load(Ordering::SeqCst), 1); // Still 1, served from cache
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_cached_fetch_distinct_urls() {
        let count = Arc::new(AtomicU32::new(0));
        let cached = CachedFetch::new(CountingFetch {
            count: count.clone(),
        });

        cached.fetch("https://a.example/jwks.json").await.unwrap();
        cached.fetch("https://b.example/jwks.json").await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cached = CachedFetch::new(FailingFetch);

        let result = cached.fetch("https://issuer.example/jwks.json").await;
        assert!(matches!(result, Err(Error::RemoteError(_))));
    }
}
