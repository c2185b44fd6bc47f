use std::env;

/// Shared admin key used when `ADMIN_KEY` is not set. A placeholder access
/// control, not real authentication.
const DEFAULT_ADMIN_KEY: &str = "ptes_admin_123";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub admin_key: String,
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// # Panics
    /// Panics if `DATABASE_URL` is missing or `PORT` is not a number.
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let admin_key =
            env::var("ADMIN_KEY").unwrap_or_else(|_| DEFAULT_ADMIN_KEY.to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("PORT must be a number");

        Self { database_url, admin_key, port }
    }
}
