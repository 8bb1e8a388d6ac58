//! Size limit constants for input validation
//!
//! Every externally supplied value is checked against one of these bounds
//! before use: the credential itself, its decoded segments, key-set
//! responses, JWK fields, the key-set URL, and timestamps.

/// Maximum length for a token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum length for the key-set URL (2048 characters)
pub(crate) const MAX_KEY_SET_URL_LENGTH: usize = 2048;

/// Maximum size for a key-set response body (512KB)
pub(crate) const MAX_KEY_SET_RESPONSE_SIZE: usize = 512 * 1024;

// ============================================================================
// Decoded segment size limits
// ============================================================================

/// Maximum size for decoded header JSON (8KB)
/// Headers are typically small (< 1KB), but we allow reasonable margin
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded payload JSON (64KB)
/// Payloads can contain custom claims, but must be bounded to prevent DoS
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;

/// Maximum size for decoded signature bytes (1KB)
/// RSA signatures are typically 256-512 bytes, but we allow margin for larger keys
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 1024;

/// Maximum size for the Base64URL-encoded signature segment (1.5KB)
/// Base64URL encoding adds ~33% overhead, so 1KB decoded ≈ 1.3KB encoded
pub(crate) const MAX_SIGNATURE_B64_SIZE: usize = 1536;

// ============================================================================
// Header field size limits
// ============================================================================

/// Maximum length for the algorithm (alg) header field (16 bytes)
/// Algorithm names are short (e.g., "RS256", "RS384", "RS512")
pub(crate) const MAX_ALG_LENGTH: usize = 16;

/// Maximum length for the key ID (kid) header field (256 bytes)
/// Key IDs are typically short identifiers, but must be bounded
pub(crate) const MAX_KID_LENGTH: usize = 256;

// ============================================================================
// JWK field size limits
// ============================================================================

/// Maximum size for the Base64URL-encoded RSA modulus (n) field (12KB)
/// 8192-byte modulus (65536 bits) encodes to ~10.9KB Base64URL
pub(crate) const MAX_JWK_N_SIZE: usize = 12 * 1024;

/// Maximum size for the Base64URL-encoded RSA exponent (e) field (64 bytes)
/// Standard exponent 65537 (0x010001) encodes to 4 bytes, but we allow margin
pub(crate) const MAX_JWK_E_SIZE: usize = 64;

// ============================================================================
// Timestamp bounds
// ============================================================================

/// Minimum valid Unix timestamp (1970-01-01 00:00:00 UTC)
pub(crate) const MIN_TIMESTAMP: i64 = 0;

/// Maximum valid Unix timestamp (2100-01-01 00:00:00 UTC)
/// 4102444800 seconds since Unix epoch
pub(crate) const MAX_TIMESTAMP: i64 = 4_102_444_800;

// ============================================================================
// Validation bounds
// ============================================================================

/// Maximum clock skew tolerance (300 seconds = 5 minutes)
/// Prevents clock skew from effectively disabling expiration checks
pub(crate) const MAX_CLOCK_SKEW_SECONDS: u64 = 300;
