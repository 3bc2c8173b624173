//! Structural document validators.

pub mod yaml;

pub use yaml::YamlValidator;
