/// Presentation service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Absolute URL of the data service's `/data` endpoint.
    pub rest_api_url: String,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var        | Default    |
    /// |----------------|------------|
    /// | `HOST`         | `0.0.0.0`  |
    /// | `PORT`         | `3000`     |
    /// | `REST_API_URL` | (required) |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let rest_api_url = lookup("REST_API_URL").expect("REST_API_URL must be set");

        Self {
            host,
            port,
            rest_api_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> WebConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        WebConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn reads_backend_url_and_port() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("REST_API_URL", "http://backend:3000/data"),
        ]);

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rest_api_url, "http://backend:3000/data");
    }

    #[test]
    #[should_panic(expected = "REST_API_URL must be set")]
    fn missing_backend_url_panics() {
        config_from(&[("PORT", "8080")]);
    }

    #[test]
    #[should_panic(expected = "PORT must be a valid u16")]
    fn invalid_port_panics() {
        config_from(&[("PORT", "70000"), ("REST_API_URL", "http://backend:3000/data")]);
    }
}
