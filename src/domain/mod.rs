pub mod artifact;
pub mod buildout;
pub mod error;
pub mod layout;
pub mod options;
pub mod resolver;

pub use artifact::{Artifact, EXECUTABLE_MODE, TemplateId};
pub use buildout::{BuildoutConfig, RecipePart, parse_buildout_content};
pub use error::AppError;
pub use layout::{Layout, RuntimePaths};
pub use options::Options;
pub use resolver::{ResolvedOptions, resolve};
