//! HTTP API Module
//!
//! The request surface of the service.
//!
//! ## Request lifecycle
//! Received -> Validated -> Dispatched -> Responded. Validation is
//! field-presence only and short-circuits before any remote call; dispatch
//! goes to the review store for CRUD or to the text generator; failures are
//! rendered as a classified status code with an `{"error": ...}` body.
//!
//! ## Submodules
//! - **`handlers`**: axum handlers for the five operations plus liveness.
//! - **`types`**: the `Review` entity and request/response DTOs.
//! - **`error`**: the client-facing failure taxonomy.

pub mod error;
pub mod handlers;
pub mod types;
