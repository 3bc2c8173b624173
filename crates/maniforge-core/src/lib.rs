//! Maniforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Maniforge
//! manifest rendering tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          maniforge-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (BatchService)               │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Render, Filesystem, Validate) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    maniforge-adapters (Infrastructure)  │
//! │  (JinjaRenderer, LocalFilesystem, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (TemplateKind, DataCatalog, Reports)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use maniforge_core::application::BatchService;
//!
//! // Use application service (with injected adapters)
//! let service = BatchService::new(renderer, filesystem, validator);
//! let report = service.run(&template_paths, &output_paths).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BatchService,
        ports::{DocumentValidator, Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        BatchReport, DataCatalog, ItemReport, ItemState, ScalarValue, Stage, TemplateData,
        TemplateKind, ValidationOutcome, ValidationReport,
    };
    pub use crate::error::{ManiforgeError, ManiforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
