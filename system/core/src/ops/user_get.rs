use crate::{Core, CoreError, User};

pub async fn by_id(core: &Core, id: i64) -> Result<Option<User>, CoreError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(&core.pool)
        .await?;

    Ok(user)
}

pub async fn by_username(core: &Core, username: &str) -> Result<Option<User>, CoreError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(&core.pool)
        .await?;

    Ok(user)
}

/// `LIKE` wildcards in `text` match themselves.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// All users, or those whose username contains `search`.
pub async fn search(core: &Core, search: Option<&str>) -> Result<Vec<User>, CoreError> {
    let pattern = match search {
        Some(search) if !search.is_empty() => format!("%{}%", escape_like(search)),
        _ => "%".to_string(),
    };

    let users = sqlx::query_as::<_, User>(
        "SELECT * FROM users WHERE username LIKE ? ESCAPE '\\' ORDER BY id",
    )
    .bind(pattern)
    .fetch_all(&core.pool)
    .await?;

    Ok(users)
}

#[cfg(test)]
mod test {
    use super::escape_like;

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(escape_like("user"), "user");
        assert_eq!(escape_like("a_b%c"), "a\\_b\\%c");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
