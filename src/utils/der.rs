//! DER encoding for converting JWK modulus/exponent pairs into key material

use crate::error::{Error, Result};

fn der_len(len: usize) -> Vec<u8> {
    if len < 0x80 {
        vec![len as u8]
    } else {
        let mut tmp = Vec::new();
        let mut n = len;
        while n > 0 {
            tmp.push((n & 0xFF) as u8);
            n >>= 8;
        }
        tmp.reverse();
        let mut v = Vec::with_capacity(1 + tmp.len());
        v.push(0x80 | (tmp.len() as u8));
        v.extend_from_slice(&tmp);
        v
    }
}

fn der_integer(bytes: &[u8]) -> Vec<u8> {
    // Minimal positive INTEGER: strip redundant leading zeros, then
    // prepend 0x00 if the MSB is set
    let mut value = bytes;
    while value.len() > 1 && value[0] == 0 {
        value = &value[1..];
    }

    let prefix_zero = value.first().is_some_and(|b| b & 0x80 != 0);
    let content_len = value.len() + usize::from(prefix_zero);

    let mut out = Vec::with_capacity(2 + content_len);
    out.push(0x02);
    out.extend_from_slice(&der_len(content_len));
    if prefix_zero {
        out.push(0x00);
    }
    out.extend_from_slice(value);
    out
}

fn der_sequence(children: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + children.len());
    out.push(0x30);
    out.extend_from_slice(&der_len(children.len()));
    out.extend_from_slice(children);
    out
}

/// Build an ASN.1 `RSAPublicKey` DER structure from modulus (n) and
/// exponent (e) bytes.
///
/// `RSAPublicKey = SEQUENCE { n INTEGER, e INTEGER }` is the form
/// `aws_lc_rs::signature::UnparsedPublicKey` expects for the
/// `RSA_PKCS1_*` verification algorithms.
///
/// # Errors
///
/// Returns `Error::RemoteError` if n or e is empty.
pub(crate) fn rsa_public_key_from_n_e(n: &[u8], e: &[u8]) -> Result<Vec<u8>> {
    if n.is_empty() || e.is_empty() {
        return Err(Error::RemoteError(
            "jwks: rsa key missing n or e".to_string(),
        ));
    }

    let n_int = der_integer(n);
    let e_int = der_integer(e);
    let mut children = Vec::with_capacity(n_int.len() + e_int.len());
    children.extend_from_slice(&n_int);
    children.extend_from_slice(&e_int);
    Ok(der_sequence(&children))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsa_public_key_from_n_e() {
        let n = vec![0x00, 0x01];
        let e = vec![0x01, 0x00, 0x01]; // 65537

        let der = rsa_public_key_from_n_e(&n, &e).expect("should encode");
        // SEQUENCE { INTEGER 1, INTEGER 65537 }
        assert_eq!(der, vec![0x30, 0x08, 0x02, 0x01, 0x01, 0x02, 0x03, 0x01, 0x00, 0x01]);
    }

    #[test]
    fn test_high_bit_modulus_gets_zero_prefix() {
        let n = vec![0xC2, 0x01];
        let e = vec![0x01, 0x00, 0x01];

        let der = rsa_public_key_from_n_e(&n, &e).expect("should encode");
        // INTEGER content must be 00 C2 01 to stay positive
        assert_eq!(&der[2..7], &[0x02, 0x03, 0x00, 0xC2, 0x01]);
    }

    #[test]
    fn test_long_form_length() {
        let n = vec![0x01; 300];
        let e = vec![0x01, 0x00, 0x01];

        let der = rsa_public_key_from_n_e(&n, &e).expect("should encode");
        assert_eq!(der[0], 0x30);
        // Content longer than 127 bytes uses the 0x82 long form
        assert_eq!(der[1], 0x82);
    }

    #[test]
    fn test_rsa_public_key_empty_n() {
        let result = rsa_public_key_from_n_e(&[], &[0x01, 0x00, 0x01]);
        assert!(matches!(result, Err(Error::RemoteError(_))));
    }

    #[test]
    fn test_rsa_public_key_empty_e() {
        let result = rsa_public_key_from_n_e(&[0x00, 0x01], &[]);
        assert!(matches!(result, Err(Error::RemoteError(_))));
    }
}
