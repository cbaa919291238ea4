use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use axum_extra::extract::cookie::SignedCookieJar;
use sailfish::TemplateSimple;
use validator::Validate;
use warbler_auth::{flash, Category};
use warbler_core::{NewMessage, User};

use super::unauthorized;
use crate::extract::CurrentUser;
use crate::forms::{self, MessageForm};
use crate::templates::{page, redirect, MessagePage, NewMessagePage};
use crate::ServerError;

fn new_page(
    jar: SignedCookieJar,
    current: &User,
    text: &str,
    errors: Vec<String>,
) -> Result<Response, ServerError> {
    let body = NewMessagePage { text, errors }.render_once()?;
    page(jar, Some(current), "New message", body)
}

pub async fn new_form(
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
) -> Result<Response, ServerError> {
    let Some(current) = current else {
        return Ok(unauthorized(jar));
    };

    new_page(jar, &current, "", vec![])
}

pub async fn create(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
    Form(form): Form<MessageForm>,
) -> Result<Response, ServerError> {
    let Some(current) = current else {
        return Ok(unauthorized(jar));
    };

    if let Err(errors) = form.validate() {
        return new_page(jar, &current, &form.text, forms::messages(&errors));
    }

    let message = state
        .core
        .create_message(NewMessage::new(current.id, &form.text))
        .await?;

    log::info!("{current} posted message {}", message.id);

    Ok(redirect(&format!("/users/{}", current.id)))
}

pub async fn show(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> Result<Response, ServerError> {
    let message = state.core.message(id).await?.ok_or(ServerError::NotFound)?;

    let liked = match &current {
        Some(c) => state.core.liked_ids(c.id).await?.contains(&message.id),
        None => false,
    };

    let body = MessagePage {
        message: &message,
        me: current.as_ref().map(|c| c.id),
        liked,
    }
    .render_once()?;

    page(jar, current.as_ref(), "Warbler", body)
}

/// Only the author may delete a message.
pub async fn delete(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> Result<Response, ServerError> {
    let Some(current) = current else {
        return Ok(unauthorized(jar));
    };

    let message = state.core.message(id).await?.ok_or(ServerError::NotFound)?;

    if message.user_id != current.id {
        return Ok(unauthorized(jar));
    }

    state.core.delete_message(message.id).await?;

    let jar = flash::push(jar, Category::Success, "Message deleted.");
    Ok((jar, redirect(&format!("/users/{}", current.id))).into_response())
}
