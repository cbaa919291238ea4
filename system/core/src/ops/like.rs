use crate::{Core, CoreError, FeedMessage, LikeState};

/// Likes the message, or takes the like back if it was already there.
pub async fn toggle(core: &Core, user_id: i64, message_id: i64) -> Result<LikeState, CoreError> {
    let mut txn = core.pool.begin().await?;

    let removed = sqlx::query("DELETE FROM likes WHERE user_id = ? AND message_id = ?")
        .bind(user_id)
        .bind(message_id)
        .execute(&mut *txn)
        .await?
        .rows_affected();

    let state = if removed > 0 {
        LikeState::Unliked
    } else {
        sqlx::query("INSERT INTO likes (user_id, message_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(message_id)
            .execute(&mut *txn)
            .await?;

        LikeState::Liked
    };

    txn.commit().await?;

    Ok(state)
}

pub async fn liked_messages(core: &Core, user_id: i64) -> Result<Vec<FeedMessage>, CoreError> {
    let messages = sqlx::query_as::<_, FeedMessage>(
        "SELECT messages.id, messages.text, messages.timestamp, messages.user_id,
            users.username, users.image_url
        FROM likes
        JOIN messages ON messages.id = likes.message_id
        JOIN users ON users.id = messages.user_id
        WHERE likes.user_id = ?
        ORDER BY messages.timestamp DESC, messages.id DESC",
    )
    .bind(user_id)
    .fetch_all(&core.pool)
    .await?;

    Ok(messages)
}

pub async fn liked_ids(core: &Core, user_id: i64) -> Result<Vec<i64>, CoreError> {
    let ids = sqlx::query_scalar::<_, i64>("SELECT message_id FROM likes WHERE user_id = ?")
        .bind(user_id)
        .fetch_all(&core.pool)
        .await?;

    Ok(ids)
}
