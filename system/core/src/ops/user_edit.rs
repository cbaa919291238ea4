use crate::{Core, CoreError, User, UserEdit};

/// Overwrites the columns that are set in `edit` on the user currently
/// called `username`. The password is not touched.
pub async fn handle(core: &Core, username: &str, edit: UserEdit) -> Result<Option<User>, CoreError> {
    let user = sqlx::query_as::<_, User>(
        "UPDATE users SET
            username = COALESCE(?, username),
            email = COALESCE(?, email),
            image_url = COALESCE(?, image_url),
            header_image_url = COALESCE(?, header_image_url),
            bio = COALESCE(?, bio),
            location = COALESCE(?, location)
        WHERE username = ?
        RETURNING *",
    )
    .bind(edit.username)
    .bind(edit.email)
    .bind(edit.image_url)
    .bind(edit.header_image_url)
    .bind(edit.bio)
    .bind(edit.location)
    .bind(username)
    .fetch_optional(&core.pool)
    .await?;

    Ok(user)
}
