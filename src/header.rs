use miniserde::Deserialize;

/// Token header structure
///
/// Carries the declared algorithm and the key ID used for key-set lookup.
/// The declared algorithm is informational only: verification always runs
/// with the fixed algorithm bound at key import.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenHeader {
    /// Algorithm the issuer claims to have signed with
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Key ID (for key-set lookup)
    #[serde(rename = "kid")]
    pub key_id: Option<String>,
}
