use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// PBKDF2 iteration count for stored passwords.
pub const PBKDF2_ROUNDS: u32 = 100_000;

const KEY_LEN: usize = 32;
const SEED_LEN: usize = 60;

/// Generate a random salt: SHA-256 of OS randomness, hex encoded
pub fn generate_salt() -> String {
    let mut seed = [0u8; SEED_LEN];
    OsRng.fill_bytes(&mut seed);
    hex::encode(Sha256::digest(seed))
}

/// Derive a base64 PBKDF2-HMAC-SHA256 key for `password`.
///
/// A fresh salt is generated when `salt` is `None`. Returns `(hash, salt)`.
pub fn hash_password(password: &str, salt: Option<&str>) -> (String, String) {
    let salt = salt.map(str::to_owned).unwrap_or_else(generate_salt);
    let mut key = [0u8; KEY_LEN];

    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut key);

    (base64_simd::STANDARD.encode_to_string(key), salt)
}

/// Verify a candidate password against a stored hash and salt
pub fn verify_password(stored_hash: &str, candidate: &str, salt: &str) -> bool {
    let (computed, _) = hash_password(candidate, Some(salt));
    computed.as_bytes().ct_eq(stored_hash.as_bytes()).into()
}
