//! Server configuration for the catalog REST API.
//!
//! Configuration can be built programmatically, parsed from command line
//! arguments, or read from `CATALOG_*` environment variables.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CATALOG_SERVER_PORT` | 8080 | Server port |
//! | `CATALOG_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `CATALOG_LOG_LEVEL` | info | Log level |
//! | `CATALOG_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `CATALOG_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `CATALOG_ENABLE_CORS` | true | Enable CORS |
//! | `CATALOG_CORS_ORIGINS` | * | Allowed origins |
//! | `CATALOG_CORS_METHODS` | GET,POST,PUT,PATCH,DELETE,OPTIONS | Allowed methods |
//! | `CATALOG_CORS_HEADERS` | Content-Type,Authorization,Accept | Allowed headers |
//! | `CATALOG_DATABASE_URL` | (none) | SQLite path, or `:memory:` |
//! | `CATALOG_ENABLE_REQUEST_ID` | true | Attach `x-request-id` to requests |
//!
//! # Example
//!
//! ```rust
//! use catalog_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use clap::Parser;

/// Default request body limit (1 MiB).
pub const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

/// Server configuration for the catalog REST API.
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog")]
#[command(about = "Product catalog REST server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "CATALOG_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "CATALOG_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CATALOG_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "CATALOG_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "CATALOG_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "CATALOG_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "CATALOG_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "CATALOG_CORS_METHODS",
        default_value = "GET,POST,PUT,PATCH,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "CATALOG_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept"
    )]
    pub cors_headers: String,

    /// Database path. `:memory:` selects an in-memory store.
    #[arg(long, env = "CATALOG_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Enable request ID tracking.
    #[arg(long, env = "CATALOG_ENABLE_REQUEST_ID", default_value = "true")]
    pub enable_request_id: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,PATCH,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept".to_string(),
            database_url: None,
            enable_request_id: true,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration, collecting every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.host.trim().is_empty() {
            errors.push("Host cannot be empty".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for tests.
    ///
    /// Uses an ephemeral port, a short timeout, and no CORS or request ids.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            database_url: Some(":memory:".to_string()),
            enable_request_id: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.max_body_size, 1_048_576);
        assert!(config.enable_cors);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_parse_matches_default() {
        let parsed = ServerConfig::try_parse_from(["catalog"]).unwrap();
        let default = ServerConfig::default();
        assert_eq!(parsed.cors_methods, default.cors_methods);
        assert_eq!(parsed.cors_headers, default.cors_headers);
        assert_eq!(parsed.max_body_size, default.max_body_size);
    }

    #[test]
    fn test_parse_flags() {
        let config = ServerConfig::try_parse_from([
            "catalog",
            "--port",
            "9000",
            "--database-url",
            ":memory:",
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_url.as_deref(), Some(":memory:"));
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_validate_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let config = ServerConfig {
            host: " ".to_string(),
            max_body_size: 0,
            request_timeout: 0,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert!(!config.enable_request_id);
        assert_eq!(config.database_url.as_deref(), Some(":memory:"));
    }
}
