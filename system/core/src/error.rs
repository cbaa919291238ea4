use sqlx::error::ErrorKind;

/// Primary result code sqlite uses for every constraint violation; the
/// extended codes (NOTNULL, UNIQUE, FOREIGNKEY, ...) share its low byte.
const SQLITE_CONSTRAINT: i32 = 19;

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("password must not be empty")]
    EmptyPassword,
    /// A write was rejected by a constraint declared in the schema.
    #[error("integrity violation: {0}")]
    Integrity(String),
    #[error("storage error: {0}")]
    Storage(#[source] sqlx::Error),
    #[error("failed to migrate: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error(transparent)]
    Auth(#[from] warbler_auth::AuthError),
}

impl CoreError {
    pub fn is_integrity(&self) -> bool {
        matches!(self, CoreError::Integrity(_))
    }
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db) = err.as_database_error() {
            let constraint = matches!(
                db.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::CheckViolation
            ) || db
                .code()
                .and_then(|code| code.parse::<i32>().ok())
                .is_some_and(|code| code & 0xff == SQLITE_CONSTRAINT);

            if constraint {
                return CoreError::Integrity(db.message().to_string());
            }
        }

        CoreError::Storage(err)
    }
}
