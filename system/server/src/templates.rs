use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::SignedCookieJar;
use sailfish::TemplateSimple;
use warbler_auth::{flash, Flash};
use warbler_core::{FeedMessage, User, UserStats};

use crate::ServerError;

pub const NOT_FOUND_HTML: &str = include_str!("../templates/404.html");
pub const HOME_ANON_HTML: &str = include_str!("../templates/home-anon.html");

#[derive(TemplateSimple)]
#[template(path = "layout.stpl")]
struct Layout<'a> {
    title: &'a str,
    current: Option<&'a User>,
    flashes: Vec<Flash>,
    body: String,
}

#[derive(TemplateSimple)]
#[template(path = "home.stpl")]
pub struct Home<'a> {
    pub user: &'a User,
    pub stats: UserStats,
    pub feed: String,
}

#[derive(TemplateSimple)]
#[template(path = "messages.stpl")]
pub struct MessageList<'a> {
    pub messages: &'a [FeedMessage],
    pub liked: &'a [i64],
    pub me: Option<i64>,
}

#[derive(TemplateSimple)]
#[template(path = "user-cards.stpl")]
pub struct UserCards<'a> {
    pub users: &'a [User],
    pub following: &'a [i64],
    pub me: Option<i64>,
}

#[derive(TemplateSimple)]
#[template(path = "users.stpl")]
pub struct UserIndex<'a> {
    pub search: &'a str,
    pub cards: String,
}

/// Sidebar and header of a user page around `content`.
#[derive(TemplateSimple)]
#[template(path = "profile.stpl")]
pub struct Profile<'a> {
    pub user: &'a User,
    pub stats: UserStats,
    pub me: Option<i64>,
    pub is_following: bool,
    pub content: String,
}

#[derive(TemplateSimple)]
#[template(path = "signup.stpl")]
pub struct SignupPage<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub image_url: &'a str,
    pub errors: Vec<String>,
}

#[derive(TemplateSimple)]
#[template(path = "login.stpl")]
pub struct LoginPage<'a> {
    pub username: &'a str,
    pub errors: Vec<String>,
}

#[derive(TemplateSimple)]
#[template(path = "edit.stpl")]
pub struct EditPage<'a> {
    pub user: &'a User,
    pub errors: Vec<String>,
}

#[derive(TemplateSimple)]
#[template(path = "new-message.stpl")]
pub struct NewMessagePage<'a> {
    pub text: &'a str,
    pub errors: Vec<String>,
}

#[derive(TemplateSimple)]
#[template(path = "message.stpl")]
pub struct MessagePage<'a> {
    pub message: &'a FeedMessage,
    pub me: Option<i64>,
    pub liked: bool,
}

/// Wraps `body` in the site layout, draining any pending flash messages
/// into it.
pub fn page(
    jar: SignedCookieJar,
    current: Option<&User>,
    title: &str,
    body: String,
) -> Result<Response, ServerError> {
    let (jar, flashes) = flash::take(jar);

    let html = Layout {
        title,
        current,
        flashes,
        body,
    }
    .render_once()?;

    Ok((jar, Html(html)).into_response())
}

/// `302 Found` to `uri`.
pub fn redirect(uri: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, uri.to_string())]).into_response()
}
