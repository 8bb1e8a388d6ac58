//! Verification orchestrator
//!
//! [`Verifier`] composes credential extraction, decoding, key resolution,
//! signature verification, and expiry evaluation into one pipeline and
//! owns the outcome contract toward callers: it always returns an
//! [`Outcome`], never an error.

use crate::claims::{Clock, SystemClock, check_expiry};
use crate::error::{Error, Result};
use crate::jwks::resolve_key;
use crate::remote::HttpFetch;
use crate::request::{BearerSource, extract_bearer};
use crate::token::decode;

/// Why a verification came back negative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The credential did not decode into three well-formed segments
    MalformedToken,
    /// The signing key could not be resolved from the key set
    KeyResolution,
    /// The token structure is fine but the signature does not verify
    InvalidSignature,
    /// The signature is valid but the token is past its expiry
    Expired,
    /// An unexpected internal fault
    Internal,
}

impl Reason {
    /// Short human-readable form; carries no internal detail
    pub const fn as_str(&self) -> &'static str {
        match self {
            Reason::MalformedToken => "malformed token",
            Reason::KeyResolution => "key resolution failed",
            Reason::InvalidSignature => "invalid signature",
            Reason::Expired => "expired",
            Reason::Internal => "internal error",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of one verification call
///
/// A missing or wrong-prefix `Authorization` header produces
/// `{ valid: false, reason: None }` — a negative result rather than a
/// failure, since unauthenticated requests are ordinary traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the request carries a valid, unexpired credential
    pub valid: bool,
    /// Why not, when it does not
    pub reason: Option<Reason>,
}

impl Outcome {
    fn granted() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    fn denied(reason: Reason) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }

    fn no_credential() -> Self {
        Self {
            valid: false,
            reason: None,
        }
    }

    /// The reason as a human-readable string, when present
    pub fn reason_str(&self) -> Option<&'static str> {
        self.reason.map(|reason| reason.as_str())
    }
}

/// Map an internal error onto the category reported to callers
fn reason_for(error: &Error) -> Reason {
    match error {
        Error::TokenTooLarge { .. }
        | Error::FormatInvalid
        | Error::FormatInvalidBase64(_)
        | Error::FormatInvalidJson(_)
        | Error::SignatureB64TooLarge { .. }
        | Error::HeaderFieldTooLong { .. }
        | Error::TimestampOutOfBounds { .. }
        | Error::TimestampOverflow => Reason::MalformedToken,

        Error::KeyIdMissing
        | Error::KeyNotFound(_)
        | Error::RemoteError(_)
        | Error::RemoteUrlTooLong { .. }
        | Error::RemoteResponseTooLarge { .. }
        | Error::JwkFieldTooLarge { .. } => Reason::KeyResolution,

        Error::SignatureLengthInvalid(_) => Reason::InvalidSignature,

        Error::ClockSkewTooLarge { .. } | Error::Internal(_) => Reason::Internal,
    }
}

/// What the pipeline established about a structurally sound token
struct Verdict {
    signature_valid: bool,
    expired: bool,
}

/// Bearer-token verifier
///
/// Configured once with its collaborators (HTTP fetch, clock) and reused
/// across requests; concurrent verifications share no mutable state.
#[derive(Clone)]
pub struct Verifier<F = reqwest::Client, C = SystemClock> {
    fetch: F,
    clock: C,
    clock_skew_seconds: u64,
    require_expiry: bool,
}

impl Verifier {
    /// Create a verifier backed by a fresh `reqwest` client and the
    /// system clock
    pub fn new() -> Self {
        Self::with_fetch(reqwest::Client::new())
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: HttpFetch> Verifier<F> {
    /// Create a verifier with an injected fetch collaborator
    /// (e.g., a configured `reqwest::Client` or a [`CachedFetch`](crate::CachedFetch))
    pub fn with_fetch(fetch: F) -> Self {
        Self {
            fetch,
            clock: SystemClock,
            clock_skew_seconds: 0,
            require_expiry: false,
        }
    }
}

impl<F: HttpFetch, C: Clock> Verifier<F, C> {
    /// Replace the time source (fixed clocks make expiry deterministic
    /// in tests)
    pub fn clock<D: Clock>(self, clock: D) -> Verifier<F, D> {
        Verifier {
            fetch: self.fetch,
            clock,
            clock_skew_seconds: self.clock_skew_seconds,
            require_expiry: self.require_expiry,
        }
    }

    /// Allow the given clock skew (seconds) in the expiry check
    pub fn clock_skew(mut self, seconds: u64) -> Self {
        self.clock_skew_seconds = seconds;
        self
    }

    /// Reject tokens that carry no `exp` claim
    ///
    /// By default a token without `exp` never expires.
    pub fn require_expiry(mut self) -> Self {
        self.require_expiry = true;
        self
    }

    /// Verify the bearer credential on a request
    ///
    /// Minimal form of [`verify_with_outcome`](Self::verify_with_outcome):
    /// just the boolean.
    pub async fn verify<R: BearerSource + ?Sized>(&self, request: &R, key_set_url: &str) -> bool {
        self.verify_with_outcome(request, key_set_url).await.valid
    }

    /// Verify the bearer credential on a request, with the reason on
    /// rejection
    ///
    /// Total function: every failure inside the pipeline is converted
    /// into a negative [`Outcome`]; nothing propagates to the caller as
    /// an error.
    pub async fn verify_with_outcome<R: BearerSource + ?Sized>(
        &self,
        request: &R,
        key_set_url: &str,
    ) -> Outcome {
        let Some(credential) = extract_bearer(request) else {
            tracing::debug!("no bearer credential on request");
            return Outcome::no_credential();
        };

        let outcome = match self.run(credential, key_set_url).await {
            Ok(verdict) => {
                if !verdict.signature_valid {
                    Outcome::denied(Reason::InvalidSignature)
                } else if verdict.expired {
                    Outcome::denied(Reason::Expired)
                } else {
                    Outcome::granted()
                }
            }
            Err(error) => {
                tracing::debug!(%error, "verification pipeline failed");
                Outcome::denied(reason_for(&error))
            }
        };

        if let Some(reason) = outcome.reason {
            tracing::warn!(%reason, "bearer token rejected");
        }

        outcome
    }

    /// The single verification pipeline both public forms project
    async fn run(&self, credential: &str, key_set_url: &str) -> Result<Verdict> {
        // 1. Decode the three segments
        let token = decode(credential)?;

        // 2. Evaluate expiry independently of the signature result, so an
        //    expired-but-genuine token reports expiry rather than forgery
        let expired = check_expiry(
            token.claims(),
            &self.clock,
            self.clock_skew_seconds,
            self.require_expiry,
        )?;

        // 3. Resolve the key named by the header
        let kid = token
            .header()
            .key_id
            .as_deref()
            .ok_or(Error::KeyIdMissing)?;
        let key = resolve_key(&self.fetch, key_set_url, kid).await?;

        // 4. Verify over the original encoded segments
        let signature_valid = key.verify(token.signed_material().as_bytes(), token.signature())?;

        Ok(Verdict {
            signature_valid,
            expired,
        })
    }
}
