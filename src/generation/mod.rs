//! Review Generation Module
//!
//! Integrates the external text-generation provider.
//!
//! ## Workflow
//! 1. **Credential**: `SecretResolver` fetches the provider credential from
//!    the secret store. The fetch happens on every generation call, so a
//!    rotated secret takes effect immediately.
//! 2. **Prompt**: a single fixed-language instruction embedding the book
//!    title and author, asking for a bounded-length review.
//! 3. **Invocation**: one non-streaming chat-completion request; no retries,
//!    no partial results.

pub mod client;
pub mod secrets;

#[cfg(test)]
mod tests;
