//! Content hashing with domain separation.
//!
//! Algorithm: SHA-256. Result format: `"sha256:<hex_digest>"`. Every domain
//! prefix is null-terminated so no prefix is a prefix of another.

use sha2::{Digest, Sha256};

/// A content-addressed hash with algorithm identifier.
///
/// Invariant: the inner string always contains exactly one `:` separator,
/// with non-empty substrings on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Domain prefix for plan report hashing.
pub const DOMAIN_PLAN_REPORT: &[u8] = b"KEYSTONE::PLAN_REPORT::V1\0";

/// Domain prefix for scenario configuration hashing.
pub const DOMAIN_SCENARIO: &[u8] = b"KEYSTONE::SCENARIO::V1\0";

/// Hash `data` under `domain`: `sha256(domain || data)`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    ContentHash {
        full: format!("sha256:{hex_digest}"),
        colon: "sha256".len(),
    }
}
