//! Book Review Record Service
//!
//! This library crate defines the core modules behind the binary executable
//! (`main.rs`): a small HTTP API for submitting, listing, updating and
//! deleting book reviews keyed by (owner, title), plus an endpoint that asks
//! an external text-generation provider to draft a review.
//!
//! ## Architecture Modules
//! - **`api`**: The HTTP surface. Request validation, dispatch, and the
//!   mapping of domain failures onto status codes and JSON error bodies.
//! - **`store`**: The persistence layer. Maps the CRUD operations onto a
//!   partitioned key-value backend and classifies backend failures into
//!   retryable vs terminal categories.
//! - **`generation`**: The provider integration. Resolves the provider
//!   credential from a secret store on demand and performs a single bounded
//!   text-generation call.
//! - **`config`**: Environment-derived service configuration.

pub mod api;
pub mod config;
pub mod generation;
pub mod store;
