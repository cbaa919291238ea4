use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

pub mod flash;
pub mod password;
pub mod session;

pub use flash::{Category, Flash};
pub use session::CURR_USER_KEY;

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("failed to hash password: {0}")]
    Hash(String),
}

/// Derives the cookie signing key from an arbitrary length secret.
///
/// `Key` wants 64 bytes of material, so the secret is run through SHA-512
/// rather than being rejected when it is short.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(&digest[..])
}
