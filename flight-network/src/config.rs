// Configuration constants and environment helpers
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::warn;

// Server configuration
pub const DEFAULT_SERVER_HOST: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// Neo4j configuration
pub const DEFAULT_NEO4J_URI: &str = "127.0.0.1:7687";
pub const DEFAULT_NEO4J_USER: &str = "neo4j";

/// Origins allowed when `CORS_ALLOWED_ORIGINS` is not set.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5173", // Vite default
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Which graph store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Neo4j,
    Memory,
}

impl StorageBackend {
    /// Parse the backend name. Unknown names fall back to Neo4j with a warning.
    fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("neo4j") => Self::Neo4j,
            Some("memory") | Some("in-memory") | Some("in_memory") => Self::Memory,
            Some(other) => {
                warn!("Invalid STORAGE_BACKEND '{}', defaulting to 'neo4j'", other);
                Self::Neo4j
            }
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// Read `LOG_FORMAT` on its own, so logging can start before the rest of
    /// the configuration is parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::parse(lookup("LOG_FORMAT").as_deref())
    }

    fn parse(value: Option<&str>) -> Result<Self> {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("compact") => Ok(Self::Compact),
            Some("json") => Ok(Self::Json),
            Some(other) => anyhow::bail!("LOG_FORMAT must be 'compact' or 'json', got '{}'", other),
        }
    }
}

/// Connection settings for the graph store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
}

/// Service configuration read from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_HOST`: bind address (default: 127.0.0.1)
/// - `SERVER_PORT`: bind port (default: 8080)
/// - `STORAGE_BACKEND`: "neo4j" or "memory" (default: neo4j)
/// - `NEO4J_URI`: Bolt endpoint (default: 127.0.0.1:7687)
/// - `NEO4J_USER`: Bolt user (default: neo4j)
/// - `NEO4J_PASSWORD`: Bolt password (default: empty)
/// - `CORS_ALLOWED_ORIGINS`: comma-separated origins (default: localhost dev origins)
/// - `LOG_FORMAT`: "compact" or "json" (default: compact)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_host: IpAddr,
    pub server_port: u16,
    pub storage: StorageConfig,
    pub cors_origins: Vec<String>,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = match lookup("SERVER_HOST") {
            Some(host) => host
                .parse::<IpAddr>()
                .with_context(|| format!("SERVER_HOST '{}' is not a valid IP address", host))?,
            None => DEFAULT_SERVER_HOST,
        };

        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("SERVER_PORT '{}' is not a valid port", port))?,
            None => DEFAULT_SERVER_PORT,
        };

        let storage = StorageConfig {
            backend: StorageBackend::parse(lookup("STORAGE_BACKEND").as_deref()),
            neo4j_uri: lookup("NEO4J_URI").unwrap_or_else(|| DEFAULT_NEO4J_URI.to_string()),
            neo4j_user: lookup("NEO4J_USER").unwrap_or_else(|| DEFAULT_NEO4J_USER.to_string()),
            neo4j_password: lookup("NEO4J_PASSWORD").unwrap_or_default(),
        };

        let cors_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(origins) => origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        let log_format = LogFormat::from_lookup(&lookup)?;

        Ok(Self {
            server_host,
            server_port,
            storage,
            cors_origins,
            log_format,
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }

    pub fn cors_layer(&self) -> Result<CorsLayer> {
        create_cors_layer(&self.cors_origins)
    }
}

/// Create the CORS layer for the given origins
pub fn create_cors_layer<S: AsRef<str>>(origins: &[S]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            o.as_ref()
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{}'", o.as_ref()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::PUT, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]))
}
