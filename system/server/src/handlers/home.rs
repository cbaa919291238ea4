use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::SignedCookieJar;
use sailfish::TemplateSimple;
use warbler_core::FEED_LIMIT;

use crate::extract::CurrentUser;
use crate::templates::{page, Home, MessageList, HOME_ANON_HTML, NOT_FOUND_HTML};
use crate::ServerError;

pub async fn homepage(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
) -> Result<Response, ServerError> {
    let Some(user) = current else {
        return page(jar, None, "Warbler", HOME_ANON_HTML.to_string());
    };

    let stats = state.core.stats(user.id).await?;
    let messages = state.core.timeline(user.id, FEED_LIMIT).await?;
    let liked = state.core.liked_ids(user.id).await?;

    let feed = MessageList {
        messages: &messages,
        liked: &liked,
        me: Some(user.id),
    }
    .render_once()?;

    let body = Home {
        user: &user,
        stats,
        feed,
    }
    .render_once()?;

    page(jar, Some(&user), "Warbler", body)
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response()
}
