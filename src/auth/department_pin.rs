use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Hash a department access PIN for storage
/// Format: hex(salt)$hex(hmac_sha256(secret, salt:pin))
pub fn hash_pin(pin: &str, secret: &str) -> Result<String, AppError> {
    let salt: [u8; 16] = rand::thread_rng().gen();
    let salt_hex = hex::encode(salt);

    let digest = create_hmac_digest(&salt_hex, pin, secret)?;

    Ok(format!("{}${}", salt_hex, digest))
}

/// Check a candidate PIN against a stored hash
/// A malformed stored value never matches
pub fn verify_pin(candidate: &str, stored: &str, secret: &str) -> Result<bool, AppError> {
    let Some((salt_hex, expected)) = stored.split_once('$') else {
        return Ok(false);
    };

    let digest = create_hmac_digest(salt_hex, candidate, secret)?;

    // Constant-time comparison
    Ok(digest.as_bytes().ct_eq(expected.as_bytes()).into())
}

fn create_hmac_digest(salt_hex: &str, pin: &str, secret: &str) -> Result<String, AppError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AppError::Internal(format!("HMAC initialization error: {}", e)))?;

    mac.update(salt_hex.as_bytes());
    mac.update(b":");
    mac.update(pin.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_for_testing_purposes";

    #[test]
    fn test_hash_and_verify_pin() {
        let stored = hash_pin("4821", SECRET).unwrap();

        assert!(verify_pin("4821", &stored, SECRET).unwrap());
        assert!(!verify_pin("4822", &stored, SECRET).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hash_pin("x", SECRET).unwrap();
        let second = hash_pin("x", SECRET).unwrap();

        assert_ne!(first, second);
        assert!(!first.contains('x'));
    }

    #[test]
    fn test_wrong_secret_does_not_verify() {
        let stored = hash_pin("4821", SECRET).unwrap();

        assert!(!verify_pin("4821", &stored, "another_secret_key_entirely").unwrap());
    }

    #[test]
    fn test_plaintext_or_garbage_never_matches() {
        assert!(!verify_pin("x", "x", SECRET).unwrap());
        assert!(!verify_pin("", "", SECRET).unwrap());
    }
}
