use std::fmt;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    /// argon2 PHC string, never the plain password.
    pub password: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<User #{}: {}, {}>", self.id, self.username, self.email)
    }
}

/// Fields for a new account.
///
/// Username and email are optional here so that a missing value reaches
/// the store and fails its not-null constraint like any other bad write.
#[derive(Debug, Clone, Default)]
pub struct Signup {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub image_url: Option<String>,
}

impl Signup {
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            image_url: None,
        }
    }

    pub fn image_url(mut self, image_url: &str) -> Self {
        self.image_url = Some(image_url.to_string());
        self
    }
}

/// Partial profile update. `None` leaves the column as it is.
#[derive(Debug, Clone, Default)]
pub struct UserEdit {
    pub username: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub header_image_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct UserStats {
    pub messages: i64,
    pub following: i64,
    pub followers: i64,
    pub likes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
}

#[derive(Debug, Clone, Default)]
pub struct NewMessage {
    pub text: Option<String>,
    /// Creation time is used when unset.
    pub timestamp: Option<DateTime<Utc>>,
    pub user_id: Option<i64>,
}

impl NewMessage {
    pub fn new(user_id: i64, text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            timestamp: None,
            user_id: Some(user_id),
        }
    }
}

/// A message joined with the bits of its author that get rendered next to it.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct FeedMessage {
    pub id: i64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
    pub username: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    Liked,
    Unliked,
}
