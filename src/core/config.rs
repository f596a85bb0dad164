//! Configuration management for the Heim MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure for the server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// External toolchain configuration (heim and cargo binaries).
    pub heim: HeimConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,

    /// Human-readable server title.
    pub title: String,

    /// Usage instructions advertised to clients.
    pub instructions: String,
}

/// Configuration for the external command-line toolchain.
///
/// Binary names are resolved through the process search path. Overriding
/// them via environment variables is also the seam tests use to substitute
/// stub executables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeimConfig {
    /// The `heim` executable to invoke.
    pub heim_bin: String,

    /// The `cargo` executable used for the scaffold build step.
    pub cargo_bin: String,

    /// Compilation target passed to `cargo build`.
    pub wasm_target: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for HeimConfig {
    fn default() -> Self {
        Self {
            heim_bin: "heim".to_string(),
            cargo_bin: "cargo".to_string(),
            wasm_target: "wasm32-wasip2".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "heim-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: "Heim MCP".to_string(),
                instructions: "MCP for Heim to create and deploy applications locally and to the cloud".to_string(),
            },
            heim: HeimConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_HEIM_BIN`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(heim_bin) = std::env::var("MCP_HEIM_BIN") {
            info!("Using heim binary override: {}", heim_bin);
            config.heim.heim_bin = heim_bin;
        }

        if let Ok(cargo_bin) = std::env::var("MCP_CARGO_BIN") {
            info!("Using cargo binary override: {}", cargo_bin);
            config.heim.cargo_bin = cargo_bin;
        }

        if let Ok(target) = std::env::var("MCP_WASM_TARGET") {
            config.heim.wasm_target = target;
        }

        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "heim-mcp");
        assert_eq!(config.heim.heim_bin, "heim");
        assert_eq!(config.heim.cargo_bin, "cargo");
        assert_eq!(config.heim.wasm_target, "wasm32-wasip2");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_heim_bin_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_HEIM_BIN", "/opt/heim/bin/heim");
        }
        let config = Config::from_env();
        assert_eq!(config.heim.heim_bin, "/opt/heim/bin/heim");
        unsafe {
            std::env::remove_var("MCP_HEIM_BIN");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "heim-mcp-dev");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "heim-mcp-dev");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_env_fallback_to_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_HEIM_BIN");
            std::env::remove_var("MCP_CARGO_BIN");
        }
        let config = Config::from_env();
        assert_eq!(config.heim.heim_bin, "heim");
        assert_eq!(config.heim.cargo_bin, "cargo");
    }
}
