use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Externally visible base URL used when deriving entity links.
    /// Falls back to `http://{host}:{port}` when not set.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ServerConfig {
    pub fn public_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}:{}", self.host, self.port),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_url: None,
        }
    }
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g. DATABASE_URL loaded via APP_DATABASE__URL or DATABASE_URL
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // Mandatory at runtime; the binary refuses to start without it
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_falls_back_to_host_and_port() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            base_url: None,
        };
        assert_eq!(server.public_base_url(), "http://0.0.0.0:8080");
    }

    #[test]
    fn explicit_base_url_wins_and_loses_trailing_slash() {
        let server = ServerConfig {
            base_url: Some("https://api.example.com/".to_string()),
            ..ServerConfig::default()
        };
        assert_eq!(server.public_base_url(), "https://api.example.com");
    }
}
