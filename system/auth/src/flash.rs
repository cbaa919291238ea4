use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};

const FLASH_KEY: &str = "flash";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Success,
    Danger,
    Info,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Danger => "danger",
            Category::Info => "info",
        }
    }
}

/// One-shot message shown on the next rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub category: Category,
    pub message: String,
}

fn pending(jar: &SignedCookieJar) -> Vec<Flash> {
    jar.get(FLASH_KEY)
        .and_then(|cookie| serde_json::from_str(cookie.value()).ok())
        .unwrap_or_default()
}

/// Queues a flash message behind any that are already pending.
pub fn push(jar: SignedCookieJar, category: Category, message: impl Into<String>) -> SignedCookieJar {
    let mut flashes = pending(&jar);
    flashes.push(Flash {
        category,
        message: message.into(),
    });

    match serde_json::to_string(&flashes) {
        Ok(value) => jar.add(
            Cookie::build((FLASH_KEY, value))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax),
        ),
        Err(err) => {
            log::error!("failed to encode flash messages: {err}");
            jar
        }
    }
}

/// Drains pending flash messages, clearing the cookie when there were any.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<Flash>) {
    let flashes = pending(&jar);

    if flashes.is_empty() {
        return (jar, flashes);
    }

    (jar.remove(Cookie::build(FLASH_KEY).path("/")), flashes)
}
