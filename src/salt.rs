use sha2::{Digest, Sha256};

pub const SALT_LEN: usize = 32;

/// Stretches or cuts `raw` to [`SALT_LEN`] bytes.
///
/// Short values are repeated `SALT_LEN / len + 1` times before truncation,
/// with `len` in bytes. The cut never splits a character, so a value with
/// multi-byte characters can come out up to three bytes short. An empty value
/// stays empty.
pub fn normalize_salt(raw: &str) -> String {
    let len = raw.len();
    if len == 0 {
        return String::new();
    }

    let mut salt = raw.to_string();
    if len < SALT_LEN {
        salt = raw.repeat(SALT_LEN / len + 1);
    }

    let mut end = SALT_LEN.min(salt.len());
    while !salt.is_char_boundary(end) {
        end -= 1;
    }
    salt.truncate(end);
    salt
}

/// Uppercase hex SHA-256 of the salt, for showing which salt is in use
/// without revealing it.
pub fn fingerprint(salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);

    format!("{:X}", hasher.finalize())
}
