//! Configuration management for the record server.
//!
//! This module provides a configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables with `RECORD_` prefix
//! - Sensible defaults for all optional settings
//!
//! # Example
//!
//! ```ignore
//! use record_server::config::Config;
//!
//! // Parse from command line and environment
//! let config = Config::parse();
//!
//! println!("Listening on {}", config.bind_address());
//! println!("Serving {}", config.data_file.display());
//! ```
//!
//! # Environment Variables
//!
//! - `RECORD_HOST` - Server bind address (default: 0.0.0.0)
//! - `RECORD_PORT` - Server port (default: 8080)
//! - `RECORD_DATA_FILE` - JSON file holding the records (default: user.json)
//! - `RECORD_AUTH_TOKEN` - Shared secret for the `Authorization` header (required)
//! - `RECORD_CORS_ORIGINS` - Allowed CORS origins, comma-separated (default: any)

use std::path::PathBuf;

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default backing file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "user.json";

// =============================================================================
// CLI Arguments
// =============================================================================

/// Record Server - a read-only JSON API over person records.
///
/// Serves the records of a local JSON file. Every data route requires the
/// shared secret in the `Authorization` header.
#[derive(Parser, Clone)]
#[command(name = "record-server")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "RECORD_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "RECORD_PORT")]
    pub port: u16,

    // =========================================================================
    // Data Configuration
    // =========================================================================
    /// JSON file containing the array of records.
    ///
    /// Re-read on every request.
    #[arg(long, default_value = DEFAULT_DATA_FILE, env = "RECORD_DATA_FILE")]
    pub data_file: PathBuf,

    // =========================================================================
    // Authentication Configuration
    // =========================================================================
    /// Shared secret expected verbatim in the `Authorization` header.
    #[arg(long, env = "RECORD_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "RECORD_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.auth_token_or_empty().is_empty() {
            return Err(
                "No auth token provided. Set --auth-token or RECORD_AUTH_TOKEN".to_string(),
            );
        }

        if self.data_file.as_os_str().is_empty() {
            return Err("data_file must not be empty".to_string());
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the auth token, or "" when unset (call validate() first).
    pub fn auth_token_or_empty(&self) -> &str {
        self.auth_token.as_deref().unwrap_or("")
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("data_file", &self.data_file)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("cors_origins", &self.cors_origins)
            .field("verbose", &self.verbose)
            .field("no_tracing", &self.no_tracing)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
