pub mod auth;
pub mod home;
pub mod messages;
pub mod users;

use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::SignedCookieJar;
use warbler_auth::{flash, Category};

use crate::templates::redirect;

/// What every login-only view answers to an anonymous visitor.
fn unauthorized(jar: SignedCookieJar) -> Response {
    let jar = flash::push(jar, Category::Danger, "Access unauthorized.");
    (jar, redirect("/")).into_response()
}
