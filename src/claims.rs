//! Claims parsing and expiry evaluation
//!
//! Only the expiration claim (`exp`) participates in verification; the
//! remaining standard claims are parsed and exposed for callers.

use crate::error::{Error, Result};
use crate::limits::{MAX_CLOCK_SKEW_SECONDS, MAX_TIMESTAMP, MIN_TIMESTAMP};
use miniserde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Standard claims carried in a token payload
///
/// All fields are optional; tokens are not required to carry any of them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Claims {
    /// Issuer (iss)
    #[serde(rename = "iss")]
    pub issuer: Option<String>,

    /// Subject (sub)
    #[serde(rename = "sub")]
    pub subject: Option<String>,

    /// Audience (aud)
    #[serde(rename = "aud")]
    pub audience: Option<String>,

    /// Expiration time (exp), seconds since Unix epoch
    #[serde(rename = "exp")]
    pub expiration: Option<i64>,

    /// Not before (nbf), seconds since Unix epoch
    #[serde(rename = "nbf")]
    pub not_before: Option<i64>,

    /// Issued at (iat), seconds since Unix epoch
    #[serde(rename = "iat")]
    pub issued_at: Option<i64>,
}

/// Time source for expiry evaluation
///
/// Injected into the [`Verifier`](crate::Verifier) so tests can run against
/// a fixed instant instead of process-wide wall-clock state.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since Unix epoch
    fn now_millis(&self) -> i64;
}

/// Wall-clock time source used by default
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_else(|_| std::time::Duration::from_secs(0))
            .as_millis() as i64
    }
}

/// Evaluate the expiration claim against the injected clock
///
/// Returns `Ok(true)` when the token is expired. A token without `exp` is
/// not expired unless `require_exp` is set, in which case the absence
/// itself counts as expired.
///
/// # Security
/// Clock skew is limited to 300 seconds so a misconfigured allowance
/// cannot effectively disable the expiration check.
pub(crate) fn check_expiry(
    claims: &Claims,
    clock: &impl Clock,
    skew_seconds: u64,
    require_exp: bool,
) -> Result<bool> {
    if skew_seconds > MAX_CLOCK_SKEW_SECONDS {
        return Err(Error::ClockSkewTooLarge {
            value: skew_seconds,
            max: MAX_CLOCK_SKEW_SECONDS,
        });
    }

    let Some(exp) = claims.expiration else {
        return Ok(require_exp);
    };

    validate_timestamp_bounds(exp)?;

    let exp_millis = exp.checked_mul(1000).ok_or(Error::TimestampOverflow)?;
    let deadline = exp_millis
        .checked_add((skew_seconds as i64) * 1000)
        .ok_or(Error::TimestampOverflow)?;

    Ok(deadline < clock.now_millis())
}

/// Check if a timestamp is within acceptable bounds
fn validate_timestamp_bounds(value: i64) -> Result<()> {
    if !(MIN_TIMESTAMP..=MAX_TIMESTAMP).contains(&value) {
        return Err(Error::TimestampOutOfBounds {
            value,
            min: MIN_TIMESTAMP,
            max: MAX_TIMESTAMP,
        });
    }
    Ok(())
}
