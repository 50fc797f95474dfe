pub mod install;
pub mod render;
pub mod resolve;
