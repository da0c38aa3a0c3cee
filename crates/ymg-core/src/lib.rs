#![deny(missing_docs)]
#![doc = "Core error types, the immutable parameter set, and canonical hashing helpers for the ymgap toolkit."]

/// Structured error types shared across ymgap crates.
pub mod errors;
/// Canonical hashing helpers.
pub mod hash;
/// Immutable parameter set for the numeric model.
pub mod params;
/// Canonical JSON helpers.
pub mod serde;

pub use errors::{ErrorInfo, GapError};
pub use hash::{round_f64, stable_hash_string};
pub use params::Params;
