//! Token decoding
//!
//! Splits a compact three-segment credential and decodes it into a
//! [`DecodedToken`]. Pure data transformation: no network, no clock.

use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::header::TokenHeader;
use crate::limits::{
    MAX_ALG_LENGTH, MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_DECODED_SIGNATURE_SIZE,
    MAX_KID_LENGTH, MAX_SIGNATURE_B64_SIZE, MAX_TOKEN_LENGTH,
};
use crate::utils::base64url;

/// A credential decoded into its structured parts
///
/// The signed material is retained exactly as it appeared on the wire:
/// the original encoded header and payload segments joined by `.`.
/// Re-encoding the decoded structures is not guaranteed to be
/// byte-identical and would break signature verification.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    header: TokenHeader,
    claims: Claims,
    raw_payload: String,
    signature: Vec<u8>,
    signed_material: String,
}

impl DecodedToken {
    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Get the parsed claims
    ///
    /// Note: claims are untrusted data until the signature verifies.
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Get the raw payload JSON (before verification)
    pub fn raw_payload(&self) -> &str {
        &self.raw_payload
    }

    /// Get the decoded signature bytes
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Get the exact byte sequence the signature covers
    /// (original encoded `header.payload` segments)
    pub fn signed_material(&self) -> &str {
        &self.signed_material
    }
}

/// Decode a compact credential string into a [`DecodedToken`]
///
/// Fails when the credential does not split into exactly three
/// `.`-separated segments, when the first two segments are not
/// Base64URL-encoded JSON, or when the third segment is not valid
/// Base64URL.
pub fn decode(credential: &str) -> Result<DecodedToken> {
    if credential.len() > MAX_TOKEN_LENGTH {
        return Err(Error::TokenTooLarge {
            size: credential.len(),
            max: MAX_TOKEN_LENGTH,
        });
    }

    let mut parts = credential.split('.');
    let header_b64 = parts.next().ok_or(Error::FormatInvalid)?;
    let payload_b64 = parts.next().ok_or(Error::FormatInvalid)?;
    let signature_b64 = parts.next().ok_or(Error::FormatInvalid)?;
    if parts.next().is_some() {
        return Err(Error::FormatInvalid);
    }

    if signature_b64.len() > MAX_SIGNATURE_B64_SIZE {
        return Err(Error::SignatureB64TooLarge {
            size: signature_b64.len(),
            max: MAX_SIGNATURE_B64_SIZE,
        });
    }

    let header_json = base64url::decode_string(header_b64, MAX_DECODED_HEADER_SIZE)?;
    let header: TokenHeader = miniserde::json::from_str(&header_json)
        .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse header: {e}")))?;

    validate_field_size("alg", &header.algorithm, MAX_ALG_LENGTH)?;
    if let Some(kid) = &header.key_id {
        validate_field_size("kid", kid, MAX_KID_LENGTH)?;
    }

    let raw_payload = base64url::decode_string(payload_b64, MAX_DECODED_PAYLOAD_SIZE)?;
    let claims: Claims = miniserde::json::from_str(&raw_payload)
        .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse payload: {e}")))?;

    let signature = base64url::decode_bytes(signature_b64, MAX_DECODED_SIGNATURE_SIZE)?;

    // Signed material is built from the original segments, never re-encoded
    let signed_material = format!("{header_b64}.{payload_b64}");

    Ok(DecodedToken {
        header,
        claims,
        raw_payload,
        signature,
        signed_material,
    })
}

/// Check a header string field against its size limit
fn validate_field_size(field: &str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(Error::HeaderFieldTooLong {
            field: field.into(),
            length: value.len(),
            max,
        });
    }
    Ok(())
}
