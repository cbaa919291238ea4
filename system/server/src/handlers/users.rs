use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use axum_extra::extract::cookie::SignedCookieJar;
use sailfish::TemplateSimple;
use serde::Deserialize;
use validator::Validate;
use warbler_auth::{flash, session, Category};
use warbler_core::{User, UserEdit, DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL, FEED_LIMIT};

use super::unauthorized;
use crate::extract::CurrentUser;
use crate::forms::{self, EditForm};
use crate::templates::{page, redirect, EditPage, MessageList, Profile, UserCards, UserIndex};
use crate::ServerError;

#[derive(Deserialize)]
pub struct Search {
    q: Option<String>,
}

/// Renders `content` inside `user`'s profile frame.
async fn profile(
    state: &crate::State,
    jar: SignedCookieJar,
    current: Option<&User>,
    user: &User,
    content: String,
) -> Result<Response, ServerError> {
    let me = current.map(|c| c.id);

    let is_following = match me {
        Some(me) => state.core.is_following(me, user.id).await?,
        None => false,
    };

    let body = Profile {
        user,
        stats: state.core.stats(user.id).await?,
        me,
        is_following,
        content,
    }
    .render_once()?;

    page(jar, current, &format!("@{}", user.username), body)
}

async fn cards(state: &crate::State, current: &User, users: &[User]) -> Result<String, ServerError> {
    let following = state.core.following_ids(current.id).await?;

    Ok(UserCards {
        users,
        following: &following,
        me: Some(current.id),
    }
    .render_once()?)
}

pub async fn list(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
    Query(search): Query<Search>,
) -> Result<Response, ServerError> {
    let q = search.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
    let users = state.core.users(q).await?;

    let following = match &current {
        Some(user) => state.core.following_ids(user.id).await?,
        None => vec![],
    };

    let cards = UserCards {
        users: &users,
        following: &following,
        me: current.as_ref().map(|c| c.id),
    }
    .render_once()?;

    let body = UserIndex {
        search: q.unwrap_or_default(),
        cards,
    }
    .render_once()?;

    page(jar, current.as_ref(), "Users", body)
}

pub async fn show(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> Result<Response, ServerError> {
    let user = state.core.user(id).await?.ok_or(ServerError::NotFound)?;

    let messages = state.core.user_messages(user.id, FEED_LIMIT).await?;
    let liked = match &current {
        Some(c) => state.core.liked_ids(c.id).await?,
        None => vec![],
    };

    let content = MessageList {
        messages: &messages,
        liked: &liked,
        me: current.as_ref().map(|c| c.id),
    }
    .render_once()?;

    profile(&state, jar, current.as_ref(), &user, content).await
}

pub async fn following(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> Result<Response, ServerError> {
    let Some(current) = current else {
        return Ok(unauthorized(jar));
    };

    let user = state.core.user(id).await?.ok_or(ServerError::NotFound)?;
    let users = state.core.following(user.id).await?;
    let content = cards(&state, &current, &users).await?;

    profile(&state, jar, Some(&current), &user, content).await
}

pub async fn followers(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> Result<Response, ServerError> {
    let Some(current) = current else {
        return Ok(unauthorized(jar));
    };

    let user = state.core.user(id).await?.ok_or(ServerError::NotFound)?;
    let users = state.core.followers(user.id).await?;
    let content = cards(&state, &current, &users).await?;

    profile(&state, jar, Some(&current), &user, content).await
}

pub async fn likes(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> Result<Response, ServerError> {
    let Some(current) = current else {
        return Ok(unauthorized(jar));
    };

    let user = state.core.user(id).await?.ok_or(ServerError::NotFound)?;
    let messages = state.core.liked_messages(user.id).await?;
    let liked = state.core.liked_ids(current.id).await?;

    let content = MessageList {
        messages: &messages,
        liked: &liked,
        me: Some(current.id),
    }
    .render_once()?;

    profile(&state, jar, Some(&current), &user, content).await
}

pub async fn follow(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> Result<Response, ServerError> {
    let Some(current) = current else {
        return Ok(unauthorized(jar));
    };

    let followed = state.core.user(id).await?.ok_or(ServerError::NotFound)?;
    state.core.follow(current.id, followed.id).await?;

    Ok(redirect(&format!("/users/{}/following", current.id)))
}

pub async fn stop_following(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> Result<Response, ServerError> {
    let Some(current) = current else {
        return Ok(unauthorized(jar));
    };

    let followed = state.core.user(id).await?.ok_or(ServerError::NotFound)?;
    state.core.unfollow(current.id, followed.id).await?;

    Ok(redirect(&format!("/users/{}/following", current.id)))
}

fn edit_page(
    jar: SignedCookieJar,
    current: &User,
    shown: &User,
    errors: Vec<String>,
) -> Result<Response, ServerError> {
    let body = EditPage {
        user: shown,
        errors,
    }
    .render_once()?;

    page(jar, Some(current), "Edit profile", body)
}

pub async fn edit_form(
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
) -> Result<Response, ServerError> {
    let Some(current) = current else {
        return Ok(unauthorized(jar));
    };

    edit_page(jar, &current, &current, vec![])
}

/// Applies a profile edit after re-checking the password. Blank image
/// fields go back to the defaults, blank bio and location stay as they are.
pub async fn edit(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
    Form(form): Form<EditForm>,
) -> Result<Response, ServerError> {
    let Some(current) = current else {
        return Ok(unauthorized(jar));
    };

    let shown = User {
        username: form.username.clone(),
        email: form.email.clone(),
        image_url: form.image_url.clone().unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        header_image_url: form
            .header_image_url
            .clone()
            .unwrap_or_else(|| DEFAULT_HEADER_IMAGE_URL.to_string()),
        bio: form.bio.clone().or_else(|| current.bio.clone()),
        location: form.location.clone().or_else(|| current.location.clone()),
        ..current.clone()
    };

    if let Err(errors) = form.validate() {
        return edit_page(jar, &current, &shown, forms::messages(&errors));
    }

    if state
        .core
        .authenticate(&current.username, &form.password)
        .await?
        .is_none()
    {
        let jar = flash::push(jar, Category::Danger, "Wrong password, please try again.");
        return Ok((jar, redirect("/")).into_response());
    }

    let edit = UserEdit {
        username: Some(shown.username.clone()),
        email: Some(shown.email.clone()),
        image_url: Some(shown.image_url.clone()),
        header_image_url: Some(shown.header_image_url.clone()),
        bio: form.bio,
        location: form.location,
    };

    match state.core.edit(&current.username, edit).await {
        Ok(Some(user)) => Ok(redirect(&format!("/users/{}", user.id))),
        Ok(None) => Err(ServerError::NotFound),
        Err(err) if err.is_integrity() => {
            let jar = flash::push(jar, Category::Danger, "Username or email already taken");
            edit_page(jar, &current, &shown, vec![])
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn delete(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
) -> Result<Response, ServerError> {
    let Some(current) = current else {
        return Ok(unauthorized(jar));
    };

    let jar = session::logout(jar);
    state.core.delete_user(current.id).await?;

    log::info!("deleted {current}");

    Ok((jar, redirect("/signup")).into_response())
}

/// Toggles the current user's like on someone else's message.
pub async fn add_like(
    State(state): State<crate::State>,
    CurrentUser(current): CurrentUser,
    jar: SignedCookieJar,
    Path(message_id): Path<i64>,
) -> Result<Response, ServerError> {
    let Some(current) = current else {
        return Ok(unauthorized(jar));
    };

    let message = state
        .core
        .message(message_id)
        .await?
        .ok_or(ServerError::NotFound)?;

    if message.user_id == current.id {
        return Err(ServerError::Forbidden);
    }

    state.core.toggle_like(current.id, message.id).await?;

    Ok(redirect("/"))
}
