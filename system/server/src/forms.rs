use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationErrors};

/// Blank form fields come through as `None`.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SignupForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct MessageForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 140, message = "Message must be 1 to 140 characters"))]
    pub text: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub header_image_url: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub password: String,
}

/// Flattens validation failures into the messages shown under the form.
pub fn messages(errors: &ValidationErrors) -> Vec<String> {
    let mut out: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .map(|err| match &err.message {
            Some(message) => message.to_string(),
            None => err.code.to_string(),
        })
        .collect();
    out.sort();
    out
}

#[cfg(test)]
mod test {
    use validator::Validate;

    use super::{messages, MessageForm, SignupForm};

    #[test]
    fn message_length() {
        let form = MessageForm {
            text: "x".repeat(141),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(messages(&errors), vec!["Message must be 1 to 140 characters"]);

        let form = MessageForm {
            text: "x".repeat(140),
        };
        assert!(form.validate().is_ok());

        assert!(MessageForm::default().validate().is_err());
    }

    #[test]
    fn signup_fields() {
        let form = SignupForm {
            username: "testuser".to_string(),
            email: "test@test.com".to_string(),
            password: "testuser".to_string(),
            image_url: None,
        };
        assert!(form.validate().is_ok());

        let form = SignupForm {
            email: "nope".to_string(),
            password: "short".to_string(),
            ..SignupForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            messages(&errors),
            vec![
                "Invalid email address",
                "Password must be at least 6 characters",
                "Username is required",
            ]
        );
    }
}
