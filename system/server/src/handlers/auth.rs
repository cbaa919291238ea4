use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Form;
use axum_extra::extract::cookie::SignedCookieJar;
use sailfish::TemplateSimple;
use validator::Validate;
use warbler_auth::{flash, session, Category};
use warbler_core::Signup;

use crate::forms::{self, LoginForm, SignupForm};
use crate::templates::{page, redirect, LoginPage, SignupPage};
use crate::ServerError;

fn signup_page(
    jar: SignedCookieJar,
    form: &SignupForm,
    errors: Vec<String>,
) -> Result<Response, ServerError> {
    let body = SignupPage {
        username: &form.username,
        email: &form.email,
        image_url: form.image_url.as_deref().unwrap_or_default(),
        errors,
    }
    .render_once()?;

    page(jar, None, "Sign up", body)
}

fn login_page(
    jar: SignedCookieJar,
    username: &str,
    errors: Vec<String>,
) -> Result<Response, ServerError> {
    let body = LoginPage { username, errors }.render_once()?;
    page(jar, None, "Log in", body)
}

/// Showing the signup form logs out whoever was logged in.
pub async fn signup_form(jar: SignedCookieJar) -> Result<Response, ServerError> {
    let jar = session::logout(jar);
    signup_page(jar, &SignupForm::default(), vec![])
}

pub async fn signup(
    State(state): State<crate::State>,
    jar: SignedCookieJar,
    Form(form): Form<SignupForm>,
) -> Result<Response, ServerError> {
    let jar = session::logout(jar);

    if let Err(errors) = form.validate() {
        return signup_page(jar, &form, forms::messages(&errors));
    }

    let mut signup = Signup::new(&form.username, &form.email, &form.password);
    signup.image_url = form.image_url.clone();

    match state.core.signup(signup).await {
        Ok(user) => {
            let jar = session::login(jar, user.id);
            Ok((jar, redirect("/")).into_response())
        }
        Err(err) if err.is_integrity() => {
            log::info!("signup rejected for {}: {err}", form.username);
            let jar = flash::push(jar, Category::Danger, "Username already taken");
            signup_page(jar, &form, vec![])
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn login_form(jar: SignedCookieJar) -> Result<Response, ServerError> {
    login_page(jar, "", vec![])
}

pub async fn login(
    State(state): State<crate::State>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, ServerError> {
    if let Err(errors) = form.validate() {
        return login_page(jar, &form.username, forms::messages(&errors));
    }

    match state.core.authenticate(&form.username, &form.password).await? {
        Some(user) => {
            let jar = session::login(jar, user.id);
            let jar = flash::push(jar, Category::Success, format!("Hello, {}!", user.username));
            Ok((jar, redirect("/")).into_response())
        }
        None => {
            let jar = flash::push(jar, Category::Danger, "Invalid credentials.");
            login_page(jar, &form.username, vec![])
        }
    }
}

pub async fn logout(jar: SignedCookieJar) -> Response {
    let jar = session::logout(jar);
    let jar = flash::push(jar, Category::Success, "You have successfully logged out.");
    (jar, redirect("/login")).into_response()
}
