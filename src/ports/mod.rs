mod artifact_writer;
mod layout_strategy;
mod runtime_environment;
mod template_renderer;

pub use artifact_writer::ArtifactWriter;
pub use layout_strategy::LayoutStrategy;
pub use runtime_environment::RuntimeEnvironment;
pub use template_renderer::TemplateRenderer;
