//! # tokengate - Bearer-Token Verification Against a Remote Key Set
//!
//! **tokengate** is the trust-boundary check a request-processing pipeline
//! runs before treating a caller as authenticated: it extracts the bearer
//! credential from an inbound request, decodes its three segments,
//! resolves the signing key from a published JWKS-style key set, verifies
//! the signature, and enforces expiry.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tokengate::Verifier;
//!
//! let verifier = Verifier::new();
//!
//! // Structured form
//! let outcome = verifier
//!     .verify_with_outcome(&request, "https://auth.example.com/.well-known/jwks.json")
//!     .await;
//! if !outcome.valid {
//!     println!("rejected: {:?}", outcome.reason_str());
//! }
//!
//! // Or just the boolean
//! let ok = verifier.verify(&request, jwks_url).await;
//! ```
//!
//! ## Verification Flow
//!
//! ```text
//! extract credential (Authorization: Bearer ...)
//!     │ decode
//!     ▼
//! DecodedToken (header, claims, signature, signed material)
//!     │ resolve key by kid from the key-set endpoint
//!     ▼
//! VerificationKey (verify-only, bound to RSA PKCS#1 v1.5 / SHA-256)
//!     │ verify signature over the original encoded segments
//!     │ evaluate expiry against the injected clock
//!     ▼
//! Outcome { valid, reason }
//! ```
//!
//! The public `verify` operations are total: every failure inside the
//! pipeline — malformed input, network trouble, unknown key, bad
//! signature, expiry — comes back as a negative [`Outcome`], never as an
//! error or panic, and the reason never carries internal detail.
//!
//! ## Security
//!
//! ### Algorithm Confusion Prevention
//!
//! The verification algorithm is fixed at key import (RS256). The `alg`
//! field a token declares is never used to select a verifier, so a token
//! minted under an attacker-chosen algorithm simply fails verification.
//!
//! ### Signed Material Integrity
//!
//! Signatures are verified over the original encoded header and payload
//! segments exactly as received. The decoded structures are never
//! re-encoded for verification, since re-encoding is not guaranteed to be
//! byte-identical.
//!
//! ### Bounded Untrusted Input
//!
//! Every externally supplied value — the credential, header fields, key
//! set responses, JWK fields, timestamps — is checked against a size or
//! range limit before use.
//!
//! ## Injected Collaborators
//!
//! Network access goes through the [`HttpFetch`] trait (implemented for
//! `reqwest::Client`, composable with the TTL-caching [`CachedFetch`])
//! and time through the [`Clock`] trait, so verification runs
//! deterministically under test with canned responses and a fixed clock.

// Core modules
mod error;
mod limits;
mod utils;

// Token decoding
mod claims;
mod header;
mod token;

// Key resolution and signature verification
mod jwks;
mod key;
mod remote;
mod url;

// Request access and orchestration
mod request;
mod verifier;

// Public Interface
pub use claims::{Claims, Clock, SystemClock};
pub use error::{Error, Result};
pub use header::TokenHeader;
pub use key::VerificationKey;
pub use remote::{CachedFetch, HttpFetch};
pub use request::{BearerSource, extract_bearer};
pub use token::{DecodedToken, decode};
pub use verifier::{Outcome, Reason, Verifier};
