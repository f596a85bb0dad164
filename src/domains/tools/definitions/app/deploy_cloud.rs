//! Cloud deploy tool definition.
//!
//! Deploys an application to the Heim cloud via `heim deploy --cloud`.

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

/// Parameters for the cloud deploy tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeployCloudParams {
    /// Absolute path to the application folder root.
    #[schemars(description = "Absolute path to the application folder root")]
    pub path: Option<String>,
}

/// Cloud deploy tool - deploys an application to the Heim cloud.
pub struct DeployCloudTool;

impl DeployCloudTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "deploy_heim_application_to_cloud";

    /// Human-readable tool title.
    pub const TITLE: &'static str = "Deploy Heim Application to Cloud";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Runs 'heim deploy' command to deploy an application to Heim cloud. Which will make the application available on the path outputted in the console.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(path = ?params.path))]
    pub async fn execute(params: &DeployCloudParams, config: &Config) -> CallToolResult {
        info!("Deploying application to Heim cloud");

        let mut spec = CommandSpec::new(&config.heim.heim_bin).arg("deploy");
        if let Some(path) = &params.path {
            spec = spec.arg(path);
        }
        let spec = spec.arg("--cloud");

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
            input_schema: schema_for_type::<DeployCloudParams>().into(),
            annotations: Some(ToolAnnotations {
                title: None,
                read_only_hint: Some(false),
                destructive_hint: Some(false),
                idempotent_hint: Some(true),
                open_world_hint: Some(true),
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
                let params: DeployCloudParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::common::{result_text, test_support::stub_heim};
    use super::*;

    #[tokio::test]
    async fn test_cloud_deploy_appends_cloud_flag() {
        let (_dir, config) = stub_heim("#!/bin/sh\nprintf '%s' \"$*\"\n");

        let params = DeployCloudParams {
            path: Some("/apps/foo".to_string()),
        };
        let result = DeployCloudTool::execute(&params, &config).await;

        assert_eq!(
            result_text(&result),
            "stdout:\ndeploy /apps/foo --cloud\nstderr:\n"
        );
    }

    #[tokio::test]
    async fn test_cloud_deploy_without_path() {
        let (_dir, config) = stub_heim("#!/bin/sh\nprintf '%s' \"$*\"\n");

        let params = DeployCloudParams { path: None };
        let result = DeployCloudTool::execute(&params, &config).await;

        assert_eq!(result_text(&result), "stdout:\ndeploy --cloud\nstderr:\n");
    }

    #[tokio::test]
    async fn test_cloud_deploy_failure() {
        let (_dir, config) = stub_heim("#!/bin/sh\necho 'not logged in' >&2\nexit 2\n");

        let params = DeployCloudParams { path: None };
        let result = DeployCloudTool::execute(&params, &config).await;

        assert_eq!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.starts_with("Error: "));
        assert!(text.contains("not logged in"));
    }

    #[test]
    fn test_tool_metadata() {
        let tool = DeployCloudTool::to_tool();
        assert_eq!(tool.name, "deploy_heim_application_to_cloud");

        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.idempotent_hint, Some(true));
        assert_eq!(annotations.open_world_hint, Some(true));
        assert_eq!(annotations.destructive_hint, Some(false));
    }
}
