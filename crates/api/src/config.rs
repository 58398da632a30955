/// Data service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var        | Default    |
    /// |----------------|------------|
    /// | `HOST`         | `0.0.0.0`  |
    /// | `PORT`         | `3000`     |
    /// | `DATABASE_URL` | (required) |
    ///
    /// Panics on a missing `DATABASE_URL` or an unparseable `PORT`;
    /// misconfiguration should stop the process before it binds.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = lookup("DATABASE_URL").expect("DATABASE_URL must be set");

        Self {
            host,
            port,
            database_url,
        }
    }
}
