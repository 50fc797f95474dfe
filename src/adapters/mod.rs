pub mod deployment_layout;
pub mod filesystem;
pub mod package_environment;
pub mod standalone_layout;
pub mod templates;

pub use deployment_layout::DeploymentLayout;
pub use filesystem::FilesystemWriter;
pub use package_environment::{PackageEnvironment, SUPERVISOR_PACKAGE};
pub use standalone_layout::StandaloneLayout;
pub use templates::EmbeddedTemplates;
