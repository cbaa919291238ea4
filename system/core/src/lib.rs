use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

mod error;
mod models;
pub mod ops;

pub use error::CoreError;
pub use models::*;

pub const DEFAULT_IMAGE_URL: &str = "/static/images/default-pic.png";
pub const DEFAULT_HEADER_IMAGE_URL: &str = "/static/images/warbler-hero.png";

/// How many messages the home timeline and profile pages show.
pub const FEED_LIMIT: i64 = 100;

/// Handle to the warbler store.
///
/// Tables
///
/// users(id, username unique, email unique, password, image_url, header_image_url, bio, location)
/// follows(followed_id -> users, follower_id -> users), keyed on the pair
/// messages(id, text, timestamp, user_id -> users)
/// likes(id, user_id -> users, message_id -> messages), unique on the pair
///
/// Every constraint above is declared in the schema, so a bad write comes
/// back from sqlite and is reported as `CoreError::Integrity`.
#[derive(Clone)]
pub struct Core {
    pool: SqlitePool,
}

impl Core {
    /// Opens (creating if needed) the database at `url`. Does not migrate.
    pub async fn connect(url: &str) -> Result<Self, CoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        log::info!("connected to {url}");

        Ok(Self { pool })
    }

    /// A private, migrated, in-memory database.
    ///
    /// Every sqlite in-memory connection is its own database, so the pool
    /// is pinned to a single connection that is never recycled.
    pub async fn memory() -> Result<Self, CoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let core = Self { pool };
        core.migrate().await?;

        Ok(core)
    }

    pub async fn migrate(&self) -> Result<(), CoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // users

    pub async fn signup(&self, signup: Signup) -> Result<User, CoreError> {
        ops::signup::handle(self, signup).await
    }

    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, CoreError> {
        ops::authenticate::handle(self, username, password).await
    }

    pub async fn edit(&self, username: &str, edit: UserEdit) -> Result<Option<User>, CoreError> {
        ops::user_edit::handle(self, username, edit).await
    }

    pub async fn user(&self, id: i64) -> Result<Option<User>, CoreError> {
        ops::user_get::by_id(self, id).await
    }

    pub async fn user_by_username(&self, username: &str) -> Result<Option<User>, CoreError> {
        ops::user_get::by_username(self, username).await
    }

    pub async fn users(&self, search: Option<&str>) -> Result<Vec<User>, CoreError> {
        ops::user_get::search(self, search).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<bool, CoreError> {
        ops::user_delete::handle(self, id).await
    }

    pub async fn stats(&self, user_id: i64) -> Result<UserStats, CoreError> {
        ops::user_stats::handle(self, user_id).await
    }

    // follows

    pub async fn follow(&self, follower_id: i64, followed_id: i64) -> Result<(), CoreError> {
        ops::follow::follow(self, follower_id, followed_id).await
    }

    pub async fn unfollow(&self, follower_id: i64, followed_id: i64) -> Result<bool, CoreError> {
        ops::follow::unfollow(self, follower_id, followed_id).await
    }

    /// Does `user_id` follow `other_id`?
    pub async fn is_following(&self, user_id: i64, other_id: i64) -> Result<bool, CoreError> {
        ops::follow::exists(self, user_id, other_id).await
    }

    /// Is `user_id` followed by `other_id`?
    pub async fn is_followed_by(&self, user_id: i64, other_id: i64) -> Result<bool, CoreError> {
        ops::follow::exists(self, other_id, user_id).await
    }

    pub async fn following(&self, user_id: i64) -> Result<Vec<User>, CoreError> {
        ops::follow::following(self, user_id).await
    }

    pub async fn followers(&self, user_id: i64) -> Result<Vec<User>, CoreError> {
        ops::follow::followers(self, user_id).await
    }

    pub async fn following_ids(&self, user_id: i64) -> Result<Vec<i64>, CoreError> {
        ops::follow::following_ids(self, user_id).await
    }

    // messages

    pub async fn create_message(&self, message: NewMessage) -> Result<Message, CoreError> {
        ops::message_create::handle(self, message).await
    }

    pub async fn message(&self, id: i64) -> Result<Option<FeedMessage>, CoreError> {
        ops::message_get::by_id(self, id).await
    }

    pub async fn user_messages(
        &self,
        user_id: i64,
        limit: i64,
    ) -> Result<Vec<FeedMessage>, CoreError> {
        ops::message_get::by_user(self, user_id, limit).await
    }

    pub async fn timeline(&self, user_id: i64, limit: i64) -> Result<Vec<FeedMessage>, CoreError> {
        ops::message_get::timeline(self, user_id, limit).await
    }

    pub async fn delete_message(&self, id: i64) -> Result<bool, CoreError> {
        ops::message_delete::handle(self, id).await
    }

    // likes

    pub async fn toggle_like(&self, user_id: i64, message_id: i64) -> Result<LikeState, CoreError> {
        ops::like::toggle(self, user_id, message_id).await
    }

    pub async fn liked_messages(&self, user_id: i64) -> Result<Vec<FeedMessage>, CoreError> {
        ops::like::liked_messages(self, user_id).await
    }

    pub async fn liked_ids(&self, user_id: i64) -> Result<Vec<i64>, CoreError> {
        ops::like::liked_ids(self, user_id).await
    }
}
