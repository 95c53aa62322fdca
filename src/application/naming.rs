//! Deterministic resource naming for partitions
//!
//! A name joins a bounded owner prefix with a fixed-width truncation of a
//! SHA-256 digest over the partition's identifying key. Same (prefix, key)
//! gives the same name in every call and every process.

use sha2::{Digest, Sha256};

use crate::domain::PartitionKey;

/// Conventional ceiling for domain-object names.
pub const DEFAULT_MAX_NAME_LEN: usize = 63;

/// Hex characters kept from the digest (first 8 bytes of SHA-256).
pub const DIGEST_LEN: usize = 16;

/// Smallest usable `max_len`: the digest plus one delimiter.
pub const MIN_NAME_LEN: usize = DIGEST_LEN + 1;

const DELIMITER: char = '-';

/// Compute the 16-character hex digest of `input`.
pub fn short_digest(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..DIGEST_LEN / 2])
}

/// Derive the bounded, deterministic name for one identifying key.
///
/// The prefix is truncated so that `prefix-digest` never exceeds `max_len`,
/// and trimmed so the result neither starts nor ends with the delimiter.
/// An empty prefix yields the digest alone.
///
/// # Arguments
/// * `prefix` - Owner-supplied name prefix (may be empty)
/// * `key` - The partition's identifying key
/// * `max_len` - Maximum total name length (typically 63)
pub fn resource_name(prefix: &str, key: &PartitionKey, max_len: usize) -> String {
    let digest = short_digest(&key.digest_input());
    let usable = max_len.saturating_sub(DIGEST_LEN + 1);
    let truncated: String = prefix.trim().chars().take(usable).collect();
    let truncated = truncated.trim_matches(DELIMITER).trim();
    if truncated.is_empty() {
        digest
    } else {
        format!("{truncated}{DELIMITER}{digest}")
    }
}
