mod error;
mod extract;
mod forms;
mod handlers;
mod templates;

pub use error::ServerError;

use handlers::{auth, home, messages, users};

use axum::extract::FromRef;
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::cookie::Key;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use warbler_core::Core;

#[derive(Clone)]
pub struct State {
    pub core: Core,
    /// Signs the session and flash cookies.
    pub key: Key,
}

impl FromRef<State> for Key {
    fn from_ref(state: &State) -> Self {
        state.key.clone()
    }
}

fn users() -> Router<State> {
    Router::new()
        .route("/", get(users::list))
        .route("/profile", get(users::edit_form).post(users::edit))
        .route("/delete", post(users::delete))
        .route("/follow/:id", post(users::follow))
        .route("/stop-following/:id", post(users::stop_following))
        .route("/add_like/:message_id", post(users::add_like))
        .route("/:id", get(users::show))
        .route("/:id/following", get(users::following))
        .route("/:id/followers", get(users::followers))
        .route("/:id/likes", get(users::likes))
}

fn messages() -> Router<State> {
    Router::new()
        .route("/new", get(messages::new_form).post(messages::create))
        .route("/:id", get(messages::show))
        .route("/:id/delete", post(messages::delete))
}

pub fn router(state: State, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(home::homepage))
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .nest("/users", users())
        .nest("/messages", messages())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(home::not_found)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate, public, max-age=0"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start(
    listener: TcpListener,
    static_dir: &str,
    state: State,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state, static_dir)).await?;

    Ok(())
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;
    use warbler_auth::signing_key;
    use warbler_core::Core;

    use super::{router, State};

    async fn app() -> Result<axum::Router, Box<dyn std::error::Error>> {
        let state = State {
            core: Core::memory().await?,
            key: signing_key("it's a secret"),
        };

        Ok(router(state, concat!(env!("CARGO_MANIFEST_DIR"), "/../../static")))
    }

    #[tokio::test]
    async fn anonymous_homepage() -> Result<(), Box<dyn std::error::Error>> {
        let resp = app()
            .await?
            .oneshot(Request::builder().uri("/").body(Body::empty())?)
            .await?;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(&b"no-cache, no-store, must-revalidate, public, max-age=0"[..])
        );

        Ok(())
    }

    #[tokio::test]
    async fn login_required() -> Result<(), Box<dyn std::error::Error>> {
        let resp = app()
            .await?
            .oneshot(Request::builder().uri("/messages/new").body(Body::empty())?)
            .await?;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).map(|v| v.as_bytes()),
            Some(&b"/"[..])
        );
        assert!(resp.headers().contains_key(header::SET_COOKIE));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_path() -> Result<(), Box<dyn std::error::Error>> {
        let resp = app()
            .await?
            .oneshot(Request::builder().uri("/nope").body(Body::empty())?)
            .await?;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn bad_path_parameter() -> Result<(), Box<dyn std::error::Error>> {
        let resp = app()
            .await?
            .oneshot(Request::builder().uri("/users/abc").body(Body::empty())?)
            .await?;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}
