//! JWK (JSON Web Key) struct and conversion

use crate::error::{Error, Result};
use crate::key::VerificationKey;
use crate::limits::{MAX_JWK_E_SIZE, MAX_JWK_N_SIZE};
use crate::utils::{base64url, der};
use miniserde::Deserialize;

/// A single key descriptor in a published key set
///
/// All fields are optional to handle various key-set formats gracefully.
/// Validation happens during conversion to [`VerificationKey`], not
/// during parsing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Jwk {
    /// Key type (e.g., "RSA")
    pub kty: Option<String>,
    /// Key ID
    pub kid: Option<String>,
    /// Algorithm
    pub alg: Option<String>,
    /// Key use
    #[serde(rename = "use")]
    pub key_use: Option<String>,
    /// RSA modulus (Base64URL-encoded)
    pub n: Option<String>,
    /// RSA exponent (Base64URL-encoded)
    pub e: Option<String>,
}

impl Jwk {
    /// Import the descriptor as a verify-only key bound to the fixed
    /// RSA-SHA256 scheme
    ///
    /// # Errors
    ///
    /// Returns `Error::RemoteError` with `"jwks: ..."` messages when the
    /// descriptor is not an RSA signing key or its material is missing
    /// or undecodable.
    pub(crate) fn to_verification_key(&self) -> Result<VerificationKey> {
        match self.kty.as_deref() {
            Some("RSA") => {}
            Some(kty) => {
                return Err(Error::RemoteError(format!(
                    "jwks: key type mismatch: expected RSA, found {kty}"
                )));
            }
            None => {
                return Err(Error::RemoteError(
                    "jwks: missing key type (kty)".to_string(),
                ));
            }
        }

        if let Some(alg) = &self.alg {
            if alg != "RS256" {
                return Err(Error::RemoteError(format!(
                    "jwks: key algorithm '{alg}' does not match RS256"
                )));
            }
        }

        if let Some(key_use) = &self.key_use {
            if key_use != "sig" {
                return Err(Error::RemoteError(format!(
                    "jwks: key use '{key_use}' is not a signing key"
                )));
            }
        }

        let n = self
            .n
            .as_deref()
            .ok_or_else(|| Error::RemoteError("jwks: rsa key missing n (modulus)".to_string()))?;
        let e = self
            .e
            .as_deref()
            .ok_or_else(|| Error::RemoteError("jwks: rsa key missing e (exponent)".to_string()))?;

        validate_jwk_field("n", n, MAX_JWK_N_SIZE)?;
        validate_jwk_field("e", e, MAX_JWK_E_SIZE)?;

        let n_bytes = base64url::decode_bytes(n, MAX_JWK_N_SIZE)
            .map_err(|e| Error::RemoteError(format!("jwks: failed to decode n: {e}")))?;
        let e_bytes = base64url::decode_bytes(e, MAX_JWK_E_SIZE)
            .map_err(|e| Error::RemoteError(format!("jwks: failed to decode e: {e}")))?;

        let key_der = der::rsa_public_key_from_n_e(&n_bytes, &e_bytes)?;
        Ok(VerificationKey::rsa_public(key_der))
    }
}

fn validate_jwk_field(field: &str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(Error::JwkFieldTooLarge {
            field: field.into(),
            size: value.len(),
            max,
        });
    }
    Ok(())
}
