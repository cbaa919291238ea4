use crate::{Core, CoreError, FeedMessage};

const SELECT_FEED: &str = "SELECT messages.id, messages.text, messages.timestamp, messages.user_id,
        users.username, users.image_url
    FROM messages
    JOIN users ON users.id = messages.user_id";

pub async fn by_id(core: &Core, id: i64) -> Result<Option<FeedMessage>, CoreError> {
    let message = sqlx::query_as::<_, FeedMessage>(&format!("{SELECT_FEED} WHERE messages.id = ?"))
        .bind(id)
        .fetch_optional(&core.pool)
        .await?;

    Ok(message)
}

/// The user's own messages, newest first.
pub async fn by_user(core: &Core, user_id: i64, limit: i64) -> Result<Vec<FeedMessage>, CoreError> {
    let messages = sqlx::query_as::<_, FeedMessage>(&format!(
        "{SELECT_FEED} WHERE messages.user_id = ?
        ORDER BY messages.timestamp DESC, messages.id DESC
        LIMIT ?"
    ))
    .bind(user_id)
    .bind(limit)
    .fetch_all(&core.pool)
    .await?;

    Ok(messages)
}

/// Messages by the user and everyone they follow, newest first.
pub async fn timeline(core: &Core, user_id: i64, limit: i64) -> Result<Vec<FeedMessage>, CoreError> {
    let messages = sqlx::query_as::<_, FeedMessage>(&format!(
        "{SELECT_FEED} WHERE messages.user_id = ?
            OR messages.user_id IN (SELECT followed_id FROM follows WHERE follower_id = ?)
        ORDER BY messages.timestamp DESC, messages.id DESC
        LIMIT ?"
    ))
    .bind(user_id)
    .bind(user_id)
    .bind(limit)
    .fetch_all(&core.pool)
    .await?;

    Ok(messages)
}
