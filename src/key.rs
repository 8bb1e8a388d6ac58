//! Verification keys
//!
//! A [`VerificationKey`] binds imported key material to the one signature
//! scheme this crate accepts: RSA PKCS#1 v1.5 with SHA-256. The binding
//! happens at import and the only exposed operation is `verify`, so the
//! key can never sign and never runs under a token-chosen algorithm.

use crate::error::{Error, Result};
use crate::limits::MAX_DECODED_SIGNATURE_SIZE;
use aws_lc_rs::signature::{self, UnparsedPublicKey};

/// The fixed verification scheme. Changing the signing algorithm is a
/// code change, not a runtime decision.
static VERIFY_RS256: &dyn signature::VerificationAlgorithm =
    &signature::RSA_PKCS1_2048_8192_SHA256;

/// An imported public key usable only for signature verification
#[derive(Clone)]
pub struct VerificationKey {
    der: Vec<u8>,
}

impl VerificationKey {
    /// Bind DER-encoded `RSAPublicKey` bytes to the fixed scheme
    ///
    /// This is the static-key entry point; keys resolved from a key set
    /// are imported through the same path.
    pub fn rsa_public(der: impl Into<Vec<u8>>) -> Self {
        Self { der: der.into() }
    }

    /// Verify a signature over the signed material
    ///
    /// A cryptographic mismatch is a valid `false` result, not an error.
    /// Only structurally impossible signatures (empty or oversized) are
    /// reported as errors.
    pub fn verify(&self, signed_material: &[u8], signature: &[u8]) -> Result<bool> {
        if signature.is_empty() || signature.len() > MAX_DECODED_SIGNATURE_SIZE {
            return Err(Error::SignatureLengthInvalid(signature.len()));
        }

        let public_key = UnparsedPublicKey::new(VERIFY_RS256, &self.der);
        Ok(public_key.verify(signed_material, signature).is_ok())
    }
}

impl std::fmt::Debug for VerificationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationKey")
            .field("der_len", &self.der.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_lc_rs::rand::SystemRandom;
    use aws_lc_rs::signature::{KeyPair, RSA_PKCS1_SHA256, RSA_PKCS1_SHA512, RsaKeyPair};
    use rsa::{RsaPrivateKey, pkcs8::EncodePrivateKey};

    fn generate_keypair() -> RsaKeyPair {
        let mut rng = rand::thread_rng();
        let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate key");
        let pkcs8_doc = private_key
            .to_pkcs8_der()
            .expect("Failed to serialize to PKCS#8");
        RsaKeyPair::from_pkcs8(pkcs8_doc.as_bytes()).expect("Failed to create RsaKeyPair")
    }

    fn sign(
        keypair: &RsaKeyPair,
        padding: &'static dyn aws_lc_rs::signature::RsaEncoding,
        data: &[u8],
    ) -> Vec<u8> {
        let rng = SystemRandom::new();
        let mut signature = vec![0u8; keypair.public_modulus_len()];
        keypair
            .sign(padding, &rng, data, &mut signature)
            .expect("Signing failed");
        signature
    }

    #[test]
    fn test_valid_signature_verifies() {
        let keypair = generate_keypair();
        let key = VerificationKey::rsa_public(keypair.public_key().as_ref().to_vec());

        let data = b"eyJhbGciOiJSUzI1NiJ9.eyJzdWIiOiJ1c2VyMTIzIn0";
        let signature = sign(&keypair, &RSA_PKCS1_SHA256, data);

        assert_eq!(key.verify(data, &signature).unwrap(), true);
    }

    #[test]
    fn test_mismatch_is_false_not_error() {
        let keypair = generate_keypair();
        let key = VerificationKey::rsa_public(keypair.public_key().as_ref().to_vec());

        let signature = sign(&keypair, &RSA_PKCS1_SHA256, b"signed data");

        assert_eq!(key.verify(b"different data", &signature).unwrap(), false);
    }

    #[test]
    fn test_wrong_key_is_false() {
        let signing_keypair = generate_keypair();
        let other_keypair = generate_keypair();
        let key = VerificationKey::rsa_public(other_keypair.public_key().as_ref().to_vec());

        let data = b"signed data";
        let signature = sign(&signing_keypair, &RSA_PKCS1_SHA256, data);

        assert_eq!(key.verify(data, &signature).unwrap(), false);
    }

    #[test]
    fn test_other_hash_is_false() {
        // A signature minted under SHA-512 must not verify under the
        // fixed SHA-256 binding
        let keypair = generate_keypair();
        let key = VerificationKey::rsa_public(keypair.public_key().as_ref().to_vec());

        let data = b"signed data";
        let signature = sign(&keypair, &RSA_PKCS1_SHA512, data);

        assert_eq!(key.verify(data, &signature).unwrap(), false);
    }

    #[test]
    fn test_empty_signature_is_error() {
        let keypair = generate_keypair();
        let key = VerificationKey::rsa_public(keypair.public_key().as_ref().to_vec());

        let result = key.verify(b"data", &[]);
        assert!(matches!(result, Err(Error::SignatureLengthInvalid(0))));
    }

    #[test]
    fn test_oversized_signature_is_error() {
        let keypair = generate_keypair();
        let key = VerificationKey::rsa_public(keypair.public_key().as_ref().to_vec());

        let oversized = vec![0u8; MAX_DECODED_SIGNATURE_SIZE + 1];
        let result = key.verify(b"data", &oversized);
        assert!(matches!(result, Err(Error::SignatureLengthInvalid(_))));
    }
}
