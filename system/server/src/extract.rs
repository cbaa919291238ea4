use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::SignedCookieJar;
use warbler_auth::session;
use warbler_core::User;

use crate::{ServerError, State};

/// The logged in user, if the session names one that still exists.
pub struct CurrentUser(pub Option<User>);

#[axum::async_trait]
impl FromRequestParts<State> for CurrentUser {
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &State) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_headers(&parts.headers, state.key.clone());

        let Some(id) = session::current_user_id(&jar) else {
            return Ok(CurrentUser(None));
        };

        Ok(CurrentUser(state.core.user(id).await?))
    }
}
