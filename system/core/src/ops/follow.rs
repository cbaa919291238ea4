use crate::{Core, CoreError, User};

/// Adds the edge `follower_id -> followed_id`. Following twice is a no-op.
pub async fn follow(core: &Core, follower_id: i64, followed_id: i64) -> Result<(), CoreError> {
    sqlx::query(
        "INSERT INTO follows (followed_id, follower_id) VALUES (?, ?) ON CONFLICT DO NOTHING",
    )
    .bind(followed_id)
    .bind(follower_id)
    .execute(&core.pool)
    .await?;

    Ok(())
}

pub async fn unfollow(core: &Core, follower_id: i64, followed_id: i64) -> Result<bool, CoreError> {
    let res = sqlx::query("DELETE FROM follows WHERE follower_id = ? AND followed_id = ?")
        .bind(follower_id)
        .bind(followed_id)
        .execute(&core.pool)
        .await?;

    Ok(res.rows_affected() > 0)
}

pub async fn exists(core: &Core, follower_id: i64, followed_id: i64) -> Result<bool, CoreError> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM follows WHERE follower_id = ? AND followed_id = ?",
    )
    .bind(follower_id)
    .bind(followed_id)
    .fetch_one(&core.pool)
    .await?;

    Ok(count > 0)
}

/// Users that `user_id` follows.
pub async fn following(core: &Core, user_id: i64) -> Result<Vec<User>, CoreError> {
    let users = sqlx::query_as::<_, User>(
        "SELECT users.* FROM users
        JOIN follows ON follows.followed_id = users.id
        WHERE follows.follower_id = ?
        ORDER BY users.id",
    )
    .bind(user_id)
    .fetch_all(&core.pool)
    .await?;

    Ok(users)
}

/// Users that follow `user_id`.
pub async fn followers(core: &Core, user_id: i64) -> Result<Vec<User>, CoreError> {
    let users = sqlx::query_as::<_, User>(
        "SELECT users.* FROM users
        JOIN follows ON follows.follower_id = users.id
        WHERE follows.followed_id = ?
        ORDER BY users.id",
    )
    .bind(user_id)
    .fetch_all(&core.pool)
    .await?;

    Ok(users)
}

pub async fn following_ids(core: &Core, user_id: i64) -> Result<Vec<i64>, CoreError> {
    let ids = sqlx::query_scalar::<_, i64>("SELECT followed_id FROM follows WHERE follower_id = ?")
        .bind(user_id)
        .fetch_all(&core.pool)
        .await?;

    Ok(ids)
}
