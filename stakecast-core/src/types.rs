use crate::draw::{draw_binary, draw_scalar, draw_subset};
use crate::error::Result;
use crate::hash::hash_seed;
use serde::{Deserialize, Serialize};

/// Client- and house-supplied seed strings.
///
/// Arbitrary text, empties included; rejecting empty seeds is a caller
/// policy, not an engine rule. Holds no other state and is discarded after
/// a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPair {
    pub client_seed: String,
    pub server_seed: String,
}

impl SeedPair {
    pub fn new(client_seed: impl Into<String>, server_seed: impl Into<String>) -> Self {
        Self {
            client_seed: client_seed.into(),
            server_seed: server_seed.into(),
        }
    }

    /// Client seed followed by server seed, the canonical hash input.
    pub fn combined(&self) -> String {
        format!("{}{}", self.client_seed, self.server_seed)
    }

    /// Canonical combination with a game-specific discriminator appended
    /// (difficulty name, segment count and the like).
    pub fn combined_with(&self, discriminator: &str) -> String {
        format!("{}{}{}", self.client_seed, self.server_seed, discriminator)
    }

    /// Integer seed for the canonical combination.
    pub fn seed(&self) -> u32 {
        hash_seed(&self.combined())
    }

    /// Integer seed for the combination with a discriminator.
    pub fn seed_with(&self, discriminator: &str) -> u32 {
        hash_seed(&self.combined_with(discriminator))
    }

    pub fn is_complete(&self) -> bool {
        !self.client_seed.is_empty() && !self.server_seed.is_empty()
    }
}

/// Scaling curve for scalar draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    Linear,
    Cubic,
}

/// What kind of draw is wanted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawRequest {
    Subset {
        domain_size: usize,
        subset_size: usize,
    },
    Scalar {
        min: f64,
        max: f64,
        curve: Curve,
    },
    Binary,
}

/// Two-way draw label. Callers map A/B onto their own outcome names
/// (heads/tails, over/under).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOutcome {
    A,
    B,
}

/// Outcome of a binary draw together with the fraction that decided it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryDraw {
    pub outcome: BinaryOutcome,
    pub raw_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DrawResult {
    Subset(Vec<usize>),
    Scalar(f64),
    Binary(BinaryDraw),
}

impl DrawRequest {
    /// Run the draw against an integer seed.
    ///
    /// Same seed, same request, same result; the only failure mode is a
    /// malformed scalar range, rejected before the draw runs.
    pub fn execute(&self, seed: u32) -> Result<DrawResult> {
        match *self {
            DrawRequest::Subset {
                domain_size,
                subset_size,
            } => Ok(DrawResult::Subset(draw_subset(seed, domain_size, subset_size))),
            DrawRequest::Scalar { min, max, curve } => {
                Ok(DrawResult::Scalar(draw_scalar(seed, min, max, curve)?))
            }
            DrawRequest::Binary => Ok(DrawResult::Binary(draw_binary(seed))),
        }
    }
}
