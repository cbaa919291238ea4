pub mod authenticate;
pub mod follow;
pub mod like;
pub mod message_create;
pub mod message_delete;
pub mod message_get;
pub mod signup;
pub mod user_delete;
pub mod user_edit;
pub mod user_get;
pub mod user_stats;
