//! Local deploy tool definition.
//!
//! Deploys an application to a locally running Heim runtime via
//! `heim deploy`.

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

/// Parameters for the local deploy tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeployParams {
    /// Absolute path to the application folder root.
    #[schemars(description = "Absolute path to the application folder root")]
    pub path: Option<String>,
}

/// Deploy tool - deploys an application to the local Heim runtime.
pub struct DeployTool;

impl DeployTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "deploy_heim_application";

    /// Human-readable tool title.
    pub const TITLE: &'static str = "Deploy Heim Application";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Runs 'heim deploy' command to deploy an application to a local Heim runtime. Which will make the application available on http://127.0.0.1:3000<PATH> where <PATH> is the path defined in your OpenAPI specification.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(path = ?params.path))]
    pub async fn execute(params: &DeployParams, config: &Config) -> CallToolResult {
        info!("Deploying application to local runtime");

        let mut spec = CommandSpec::new(&config.heim.heim_bin).arg("deploy");
        if let Some(path) = &params.path {
            spec = spec.arg(path);
        }

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
            input_schema: schema_for_type::<DeployParams>().into(),
            annotations: Some(ToolAnnotations {
                title: None,
                read_only_hint: Some(false),
                destructive_hint: Some(false),
                idempotent_hint: Some(true),
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
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: DeployParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}
