use clap::Args;

/// Settings shared by every command. Each can also come from the environment.
#[derive(Args, Debug, Clone)]
pub struct Config {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://warbler.db")]
    pub database_url: String,

    #[arg(long, env = "WARBLER_BIND", default_value = "0.0.0.0:5000")]
    pub bind: String,

    /// Hashed into the key that signs session cookies.
    #[arg(long, env = "SECRET_KEY", default_value = "it's a secret", hide_env_values = true)]
    pub secret_key: String,

    #[arg(long, env = "WARBLER_STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
}
