//! Domain layer - Pure abstractions over the upstream providers
//!
//! This layer contains NO framework dependencies (no Axum, no reqwest).
//! Only trait definitions, JSON accessors and domain error types.

pub mod errors;
pub mod media;
pub mod providers;

pub use errors::ProviderError;
pub use providers::*;
