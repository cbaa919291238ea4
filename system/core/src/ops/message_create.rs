use chrono::Utc;

use crate::{Core, CoreError, Message, NewMessage};

pub async fn handle(core: &Core, message: NewMessage) -> Result<Message, CoreError> {
    let timestamp = message.timestamp.unwrap_or_else(Utc::now);

    let message = sqlx::query_as::<_, Message>(
        "INSERT INTO messages (text, timestamp, user_id) VALUES (?, ?, ?) RETURNING *",
    )
    .bind(message.text)
    .bind(timestamp)
    .bind(message.user_id)
    .fetch_one(&core.pool)
    .await?;

    Ok(message)
}
