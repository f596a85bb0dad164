//! Application lifecycle tools: scaffold, local deploy, cloud deploy.

mod deploy;
mod deploy_cloud;
mod new_application;

pub use deploy::{DeployParams, DeployTool};
pub use deploy_cloud::{DeployCloudParams, DeployCloudTool};
pub use new_application::{NewApplicationParams, NewApplicationTool};
