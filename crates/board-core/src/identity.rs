// Rust guideline compliant 2026-10-19

//! Hash-based issue identifiers.
//!
//! IDs have the form `iss-` followed by six lower-case hex characters taken
//! from a SHA-256 digest of the title, creator, timestamp and a nonce.

use crate::{Error, IssueId, Result};
use sha2::{Digest, Sha256};

/// Prefix shared by every issue ID.
pub const ID_PREFIX: &str = "iss-";

/// Number of hex characters after the prefix.
const HASH_LEN: usize = 6;

/// Generates a hash-based issue ID.
///
/// # Arguments
///
/// * `title` - Issue title
/// * `author` - Creator identity
/// * `timestamp` - Unix timestamp of creation
/// * `nonce` - Disambiguator used when a generated ID collides
///
/// # Returns
///
/// An ID of the form `iss-XXXXXX`.
pub fn generate_id(title: &str, author: &str, timestamp: i64, nonce: u32) -> IssueId {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(author.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hex = format!("{:x}", hasher.finalize());
    format!("{}{}", ID_PREFIX, &hex[..HASH_LEN])
}

/// Validates the format of an issue ID.
///
/// # Errors
///
/// Returns a validation error if the ID does not match `iss-` plus six
/// lower-case hex characters.
pub fn validate_id_format(id: &str) -> Result<()> {
    let valid = id
        .strip_prefix(ID_PREFIX)
        .map(|hash| {
            hash.len() == HASH_LEN
                && hash
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(Error::Validation(format!("Invalid issue ID format: {}", id)))
    }
}

/// Resolves a partial issue ID to its full ID.
///
/// The partial may include or omit the `iss-` prefix and is matched as a
/// case-insensitive prefix of the hash part.
///
/// # Errors
///
/// Returns an error if:
/// - The partial is empty
/// - No ID matches (`NotFound`)
/// - More than one ID matches (`AmbiguousId`)
pub fn resolve_partial_id(partial: &str, ids: &[IssueId]) -> Result<IssueId> {
    let needle = partial.trim().to_lowercase();
    let needle = needle.strip_prefix(ID_PREFIX).unwrap_or(&needle);
    if needle.is_empty() {
        return Err(Error::Validation("Issue ID cannot be empty".to_string()));
    }

    if let Some(exact) = ids
        .iter()
        .find(|id| id.strip_prefix(ID_PREFIX) == Some(needle))
    {
        return Ok(exact.clone());
    }

    let matches: Vec<IssueId> = ids
        .iter()
        .filter(|id| {
            id.strip_prefix(ID_PREFIX)
                .is_some_and(|hash| hash.starts_with(needle))
        })
        .cloned()
        .collect();

    match matches.len() {
        0 => Err(Error::NotFound(partial.to_string())),
        1 => Ok(matches[0].clone()),
        _ => Err(Error::AmbiguousId(partial.to_string(), matches)),
    }
}
