//! Tool Registry - central registration and metadata for all tools.
//!
//! This module provides a registry of all available tools and their
//! metadata for listing. The router (`router.rs`) must stay consistent
//! with it; a test enforces that.

use rmcp::model::Tool;

use super::definitions::{
    ClearTool, DeployCloudTool, DeployTool, NewApplicationTool, StartTool, UpdateTool,
};

/// Tool registry - the authoritative list of available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            NewApplicationTool::NAME,
            DeployTool::NAME,
            DeployCloudTool::NAME,
            StartTool::NAME,
            ClearTool::NAME,
            UpdateTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            NewApplicationTool::to_tool(),
            DeployTool::to_tool(),
            DeployCloudTool::to_tool(),
            StartTool::to_tool(),
            ClearTool::to_tool(),
            UpdateTool::to_tool(),
        ]
    }
}
