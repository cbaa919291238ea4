use warbler_auth::password;

use crate::{Core, CoreError, Signup, User, DEFAULT_IMAGE_URL};

/// Hashes the password and inserts the user.
///
/// An empty password is refused up front; everything else (missing or
/// duplicate username/email) is left to the table constraints.
pub async fn handle(core: &Core, signup: Signup) -> Result<User, CoreError> {
    let password = match signup.password.as_deref() {
        Some(password) if !password.is_empty() => password,
        _ => return Err(CoreError::EmptyPassword),
    };

    let hashed = password::hash(password)?;
    let image_url = signup
        .image_url
        .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, email, password, image_url) VALUES (?, ?, ?, ?) RETURNING *",
    )
    .bind(signup.username)
    .bind(signup.email)
    .bind(hashed)
    .bind(image_url)
    .fetch_one(&core.pool)
    .await?;

    log::info!("signed up {user}");

    Ok(user)
}
