use warbler_auth::password;

use crate::{Core, CoreError, User};

/// The user, if `username` exists and `password` matches its hash.
pub async fn handle(core: &Core, username: &str, password: &str) -> Result<Option<User>, CoreError> {
    let Some(user) = core.user_by_username(username).await? else {
        return Ok(None);
    };

    if password::verify(&user.password, password) {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}
