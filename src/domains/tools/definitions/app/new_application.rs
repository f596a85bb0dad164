//! Application scaffolding tool definition.
//!
//! Runs `heim new` to create application scaffolding from an OpenAPI
//! specification, then builds the generated crate with `cargo build` for
//! the wasm target. Both commands are invoked exactly once per call; the
//! build runs regardless of the scaffold outcome.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{CommandReport, failure_result};
use crate::core::config::Config;
use crate::core::process::{self, CommandSpec};

/// Parameters for the scaffolding tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewApplicationParams {
    /// Where the project is created on disk.
    #[schemars(
        description = "Absolute path to the folder where the project should be created. The created project will be under this path with a folder name called 'name'. The code to modify will be under <PATH>/<NAME>/src/ and the heim folder within shouldn't be modified."
    )]
    pub path: String,

    /// OpenAPI specification to scaffold from.
    #[schemars(
        description = "Absolute path to OpenAPI file. The schema requires operationId and a full list of what Heim supports of the OpenAPI schema can be found here: https://cloud.heim.dev/heim/docs/templates/openapi/#openapi-root-object"
    )]
    pub open_api_path: Option<String>,

    /// Application name.
    #[schemars(
        description = "The name of the application. This will be used to name the application folder and set the name in the application.toml file."
    )]
    pub name: Option<String>,
}

/// Structured output for a scaffold-and-build run.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct NewApplicationReport {
    /// Report for the `heim new` step.
    pub scaffold: CommandReport,

    /// Report for the `cargo build` step.
    pub build: CommandReport,
}

/// Scaffolding tool - creates a new Heim application and builds it.
pub struct NewApplicationTool;

impl NewApplicationTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "new_heim_application";

    /// Human-readable tool title.
    pub const TITLE: &'static str = "New Heim Application";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Runs 'heim new' command on your local computer to create application scaffolding from an OpenAPI 3.0.1 specification.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(path = %params.path))]
    pub async fn execute(params: &NewApplicationParams, config: &Config) -> CallToolResult {
        info!("Scaffolding new application");

        let mut scaffold = CommandSpec::new(&config.heim.heim_bin)
            .arg("new")
            .arg("--path")
            .arg(&params.path);
        if let Some(spec_path) = &params.open_api_path {
            scaffold = scaffold.arg("--spec").arg(spec_path);
        }

        let build = CommandSpec::new(&config.heim.cargo_bin)
            .arg("build")
            .arg("--manifest-path")
            .arg(format!("{}/generated/Cargo.toml", params.path))
            .arg("--target")
            .arg(&config.heim.wasm_target);

        let scaffold_outcome = process::run(&scaffold).await;
        // Build runs regardless of the scaffold outcome.
        let build_outcome = process::run(&build).await;

        match (scaffold_outcome, build_outcome) {
            (Ok(scaffold_out), Ok(build_out)) => {
                let text = format!(
                    "new stdout:\n{}\nbuild stdout:\n{}\nnew stderr:\n{}\nbuild stderr:\n{}",
                    scaffold_out.stdout, build_out.stdout, scaffold_out.stderr, build_out.stderr
                );
                let report = NewApplicationReport {
                    scaffold: CommandReport::new(&scaffold, &scaffold_out),
                    build: CommandReport::new(&build, &build_out),
                };

                CallToolResult {
                    content: vec![Content::text(text)],
                    structured_content: Some(serde_json::to_value(&report).unwrap()),
                    is_error: Some(false),
                    meta: None,
                }
            }
            (Err(err), _) => failure_result(&err),
            (Ok(_), Err(err)) => failure_result(&err),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<NewApplicationParams>().into(),
            annotations: Some(ToolAnnotations {
                title: None,
                read_only_hint: Some(false),
                destructive_hint: Some(false),
                idempotent_hint: Some(false),
                open_world_hint: Some(false),
            }),
            output_schema: Some(schema_for_type::<NewApplicationReport>().into()),
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
                let params: NewApplicationParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}
