use crate::{Core, CoreError};

pub async fn handle(core: &Core, id: i64) -> Result<bool, CoreError> {
    let res = sqlx::query("DELETE FROM messages WHERE id = ?")
        .bind(id)
        .execute(&core.pool)
        .await?;

    Ok(res.rows_affected() > 0)
}
