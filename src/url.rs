//! Key-set URL validation
//!
//! The key-set URL is caller-supplied but still checked before any fetch:
//! length, scheme, and host requirements bound what this crate will reach
//! out to.

use crate::error::{Error, Result};
use crate::limits::MAX_KEY_SET_URL_LENGTH;

/// Validate the key-set URL format and size
pub(crate) fn validate_key_set_url(raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        return Err(Error::RemoteError("key set URL cannot be empty".into()));
    }

    if raw.len() > MAX_KEY_SET_URL_LENGTH {
        return Err(Error::RemoteUrlTooLong {
            length: raw.len(),
            max: MAX_KEY_SET_URL_LENGTH,
        });
    }

    let parsed = raw
        .parse::<url::Url>()
        .map_err(|e| Error::RemoteError(format!("invalid key set URL: {e}")))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::RemoteError(
            "key set URL must use http or https scheme".into(),
        ));
    }

    if parsed.host_str().is_none() {
        return Err(Error::RemoteError(
            "key set URL must have a valid host".into(),
        ));
    }

    Ok(())
}
