//! Key-set fetching and key resolution
pub(crate) mod jwk;

use crate::error::{Error, Result};
use crate::jwks::jwk::Jwk;
use crate::key::VerificationKey;
use crate::limits::MAX_KEY_SET_RESPONSE_SIZE;
use crate::remote::HttpFetch;
use crate::url::validate_key_set_url;
use miniserde::Deserialize;

/// A published key set
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct KeySet {
    /// The keys in the set
    pub keys: Vec<Jwk>,
}

/// Fetch and parse a key set from the given URL
///
/// One GET through the injected fetch collaborator; no retries. The URL
/// is validated before anything leaves the process.
pub(crate) async fn fetch_key_set<F: HttpFetch + ?Sized>(
    fetch: &F,
    key_set_url: &str,
) -> Result<KeySet> {
    validate_key_set_url(key_set_url)?;

    tracing::debug!(url = key_set_url, "fetching key set");
    let bytes = fetch.fetch(key_set_url).await?;

    if bytes.len() > MAX_KEY_SET_RESPONSE_SIZE {
        return Err(Error::RemoteResponseTooLarge {
            size: bytes.len(),
            max: MAX_KEY_SET_RESPONSE_SIZE,
        });
    }

    let body = std::str::from_utf8(&bytes)
        .map_err(|e| Error::RemoteError(format!("jwks: utf8 decode failed: {e}")))?;

    let set: KeySet = miniserde::json::from_str(body)
        .map_err(|_| Error::RemoteError("jwks: invalid key set json".to_string()))?;

    Ok(set)
}

/// Find a key in the set by key ID
///
/// Linear search; the first descriptor whose `kid` matches wins.
pub(crate) fn find_key<'a>(set: &'a KeySet, kid: &str) -> Result<&'a Jwk> {
    set.keys
        .iter()
        .find(|key| key.kid.as_deref() == Some(kid))
        .ok_or_else(|| Error::KeyNotFound(kid.to_string()))
}

/// Resolve a verification key: fetch the set, find the descriptor named
/// by `kid`, import it as a verify-only key
pub(crate) async fn resolve_key<F: HttpFetch + ?Sized>(
    fetch: &F,
    key_set_url: &str,
    kid: &str,
) -> Result<VerificationKey> {
    let set = fetch_key_set(fetch, key_set_url).await?;
    let jwk = find_key(&set, kid)?;
    jwk.to_verification_key()
}
