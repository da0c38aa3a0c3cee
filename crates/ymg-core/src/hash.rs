use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::GapError;
use crate::serde::to_canonical_json_bytes;

/// Computes a stable hexadecimal SHA-256 hash for the provided payload using
/// canonical JSON ordering.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, GapError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}

/// Rounds a floating point value to the canonical reporting precision.
pub fn round_f64(value: f64) -> f64 {
    let scaled = (value * 1e9).round();
    scaled / 1e9
}
