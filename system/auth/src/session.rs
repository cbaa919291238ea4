use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};

/// Session cookie holding the id of the logged in user.
pub const CURR_USER_KEY: &str = "curr_user";

pub fn login(jar: SignedCookieJar, user_id: i64) -> SignedCookieJar {
    jar.add(
        Cookie::build((CURR_USER_KEY, user_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

pub fn logout(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(CURR_USER_KEY).path("/"))
}

/// The user id stored in the session, if the cookie is present, carries a
/// valid signature and parses.
pub fn current_user_id(jar: &SignedCookieJar) -> Option<i64> {
    jar.get(CURR_USER_KEY)?.value().parse().ok()
}

#[cfg(test)]
mod test {
    use axum_extra::extract::cookie::{Cookie, SignedCookieJar};

    use super::{current_user_id, login, logout, CURR_USER_KEY};
    use crate::signing_key;

    #[test]
    fn login_then_logout() {
        let jar = SignedCookieJar::new(signing_key("it's a secret"));
        assert_eq!(current_user_id(&jar), None);

        let jar = login(jar, 8989);
        assert_eq!(current_user_id(&jar), Some(8989));

        let jar = logout(jar);
        assert_eq!(current_user_id(&jar), None);
    }

    #[test]
    fn unparseable_id_is_ignored() {
        let jar = SignedCookieJar::new(signing_key("it's a secret"))
            .add(Cookie::new(CURR_USER_KEY, "not-a-number"));

        assert_eq!(current_user_id(&jar), None);
    }
}
