//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "render the batch and validate the outputs".

pub mod batch_service;

pub use batch_service::BatchService;
