//! Transport layer for the MCP server.
//!
//! The server communicates over standard input/output, the default MCP
//! mode. The transport owns the connection lifecycle, including
//! signal-driven shutdown, and delegates message processing to the MCP
//! server handler.

mod config;
mod error;
mod service;
mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
