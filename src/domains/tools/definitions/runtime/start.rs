//! Runtime start tool definition.
//!
//! Starts the Heim runtime via `heim start`.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{CommandReport, command_result, failure_result};
use crate::core::config::Config;
use crate::core::process::{self, CommandSpec};

/// Parameters for the start tool. The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct StartParams {}

/// Start tool - starts the Heim runtime.
pub struct StartTool;

impl StartTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "heim_start";

    /// Human-readable tool title.
    pub const TITLE: &'static str = "Start Heim Runtime";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Starts the Heim runtime which will run your backend applications and handle deployment requests of your applications.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(config: &Config) -> CallToolResult {
        info!("Starting Heim runtime");

        let spec = CommandSpec::new(&config.heim.heim_bin).arg("start");

        match process::run(&spec).await {
            Ok(output) => command_result(&spec, &output),
            Err(err) => failure_result(&err),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<StartParams>().into(),
            annotations: Some(ToolAnnotations {
                title: None,
                read_only_hint: Some(false),
                destructive_hint: Some(false),
                idempotent_hint: Some(false),
                open_world_hint: Some(false),
            }),
            output_schema: Some(schema_for_type::<CommandReport>().into()),
            icons: None,
            meta: None,
            title: Some(Self::TITLE.into()),
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let config = config.clone();
            async move { Ok(Self::execute(&config).await) }.boxed()
        })
    }
}
