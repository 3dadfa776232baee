//! Server-seed commitment.
//!
//! Lets the house publish `SHA-256(server_seed)` before a round and prove
//! afterwards that the revealed seed matches. This is a commitment
//! convention only; it says nothing about the fairness of the draw
//! distribution itself.

use crate::error::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A published commitment to a server seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCommitment {
    pub digest: String,
    pub created_at: DateTime<Utc>,
}

impl SeedCommitment {
    /// Commit to a server seed before it is revealed.
    pub fn commit(server_seed: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(server_seed.as_bytes());
        Self {
            digest: hex::encode(hasher.finalize()),
            created_at: Utc::now(),
        }
    }

    /// Rebuild a commitment from a previously published digest.
    pub fn from_digest(digest: &str) -> Result<Self> {
        let is_hex = digest.len() == 64 && digest.chars().all(|c| c.is_ascii_hexdigit());
        if !is_hex {
            return Err(GameError::MalformedDigest(digest.to_string()));
        }
        Ok(Self {
            digest: digest.to_ascii_lowercase(),
            created_at: Utc::now(),
        })
    }

    /// Check a revealed server seed against the published digest.
    pub fn verify(&self, server_seed: &str) -> bool {
        let mut hasher = Sha256::new();
        hasher.update(server_seed.as_bytes());
        hex::encode(hasher.finalize()) == self.digest
    }
}

/// Random printable server seed for callers that want the house side
/// generated for them.
pub fn generate_server_seed() -> String {
    use rand::distributions::Alphanumeric;
    use rand::Rng;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}
