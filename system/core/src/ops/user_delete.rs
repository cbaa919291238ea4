use crate::{Core, CoreError};

/// Removes the user. Their messages, likes and follow edges go with them
/// through the schema's `ON DELETE CASCADE`.
pub async fn handle(core: &Core, id: i64) -> Result<bool, CoreError> {
    let res = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(&core.pool)
        .await?;

    if res.rows_affected() > 0 {
        log::info!("deleted user {id}");
    }

    Ok(res.rows_affected() > 0)
}
