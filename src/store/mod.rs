//! Review Persistence Module
//!
//! Maps the CRUD surface onto a partitioned key-value backend.
//!
//! ## Core Concepts
//! - **Partitioning**: reviews are grouped by owner; the owner hashes to one
//!   of 256 fixed partitions.
//! - **Backend seam**: `KeyValueBackend` is the injected storage dependency;
//!   `MemoryBackend` is the in-process implementation.
//! - **Adapter**: `ReviewStore` applies the domain semantics (an empty list
//!   is a miss, writes are upserts, deletes report prior existence).
//! - **Classification**: backend failure signals collapse into two
//!   client-facing categories, retryable vs terminal.

pub mod adapter;
pub mod backend;
pub mod classify;
pub mod partitioner;
