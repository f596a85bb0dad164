//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! Each tool knows how to create its own route; this module only wires
//! them together for the server handler.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    ClearTool, DeployCloudTool, DeployTool, NewApplicationTool, StartTool, UpdateTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(NewApplicationTool::create_route(config.clone()))
        .with_route(DeployTool::create_route(config.clone()))
        .with_route(DeployCloudTool::create_route(config.clone()))
        .with_route(StartTool::create_route(config.clone()))
        .with_route(ClearTool::create_route(config.clone()))
        .with_route(UpdateTool::create_route(config))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let tools = router.list_all();
        assert_eq!(tools.len(), 6);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"new_heim_application"));
        assert!(names.contains(&"deploy_heim_application"));
        assert!(names.contains(&"deploy_heim_application_to_cloud"));
        assert!(names.contains(&"heim_start"));
        assert!(names.contains(&"heim_clear"));
        assert!(names.contains(&"heim_update"));
    }

    #[tokio::test]
    async fn test_concurrent_calls_produce_independent_responses() {
        use super::super::definitions::app::DeployParams;
        use super::super::definitions::common::{result_text, test_support::stub_heim};
        use super::super::definitions::{DeployTool, StartTool};

        let (_dir_a, config_a) = stub_heim("#!/bin/sh\nprintf 'runtime started'\n");
        let (_dir_b, config_b) = stub_heim("#!/bin/sh\nprintf 'deployed'\n");

        let params = DeployParams {
            path: Some("/apps/foo".to_string()),
        };
        let (start, deploy) = tokio::join!(
            StartTool::execute(&config_a),
            DeployTool::execute(&params, &config_b),
        );

        assert_eq!(result_text(&start), "stdout:\nruntime started\nstderr:\n");
        assert_eq!(result_text(&deploy), "stdout:\ndeployed\nstderr:\n");
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
