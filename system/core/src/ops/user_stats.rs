use crate::{Core, CoreError, UserStats};

pub async fn handle(core: &Core, user_id: i64) -> Result<UserStats, CoreError> {
    let stats = sqlx::query_as::<_, UserStats>(
        "SELECT
            (SELECT COUNT(*) FROM messages WHERE user_id = ?) AS messages,
            (SELECT COUNT(*) FROM follows WHERE follower_id = ?) AS following,
            (SELECT COUNT(*) FROM follows WHERE followed_id = ?) AS followers,
            (SELECT COUNT(*) FROM likes WHERE user_id = ?) AS likes",
    )
    .bind(user_id)
    .bind(user_id)
    .bind(user_id)
    .bind(user_id)
    .fetch_one(&core.pool)
    .await?;

    Ok(stats)
}
