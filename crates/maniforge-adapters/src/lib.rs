//! Infrastructure adapters for Maniforge.
//!
//! This crate implements the ports defined in
//! `maniforge-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod validator;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::JinjaRenderer;
pub use validator::YamlValidator;
