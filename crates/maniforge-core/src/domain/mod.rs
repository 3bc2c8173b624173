// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Maniforge.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, templating, and YAML parsing concerns are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod error;
pub mod report;
pub mod template;

// Re-exports for convenience
pub use error::DomainError;
pub use report::{BatchReport, ItemReport, ItemState, Stage, ValidationOutcome, ValidationReport};
pub use template::{
    DataCatalog, MARKER_CLOSE, MARKER_OPEN, ScalarValue, TemplateData, TemplateKind,
    deployment_data, has_placeholders, service_data,
};
