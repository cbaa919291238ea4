use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::AuthError;

/// Generates a new argon2 PHC string for `password`.
pub fn hash(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| AuthError::Hash(err.to_string()))?;

    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC string. Anything that isn't a
/// parseable hash never verifies.
pub fn verify(hash: &str, password: &str) -> bool {
    let hash = match PasswordHash::new(hash) {
        Ok(hash) => hash,
        Err(err) => {
            log::error!("failed to parse password hash: {err}");
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
}

#[cfg(test)]
mod test {
    use super::{hash, verify};

    #[test]
    fn hash_and_verify() -> Result<(), Box<dyn std::error::Error>> {
        let stored = hash("testcode")?;

        assert_ne!(stored, "testcode");
        assert!(stored.starts_with("$argon2"));
        assert!(verify(&stored, "testcode"));
        assert!(!verify(&stored, "nope"));

        Ok(())
    }

    #[test]
    fn same_password_different_salt() -> Result<(), Box<dyn std::error::Error>> {
        assert_ne!(hash("password")?, hash("password")?);
        Ok(())
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify("HASHED_PASSWORD", "HASHED_PASSWORD"));
        assert!(!verify("", ""));
    }
}
