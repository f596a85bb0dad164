//! Heim MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that proxies
//! the external `heim` command-line program for creating, building, and
//! deploying applications locally and to the Heim cloud.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   subprocess execution, the main server handler, and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that proxy Heim CLI actions
//!
//! # Example
//!
//! ```rust,no_run
//! use heim_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone());
//!     let transport = TransportService::new(config.transport);
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
