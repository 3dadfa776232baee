use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use stakecast_core::{draw_binary, BinaryOutcome, SeedPair};
use std::fmt;

/// Coin flip predictor.
#[derive(Debug, Clone, Default)]
pub struct FlipPredictor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinSide {
    Heads,
    Tails,
}

impl fmt::Display for CoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinSide::Heads => write!(f, "heads"),
            CoinSide::Tails => write!(f, "tails"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlipPrediction {
    pub outcome: CoinSide,
    /// The raw deciding fraction scaled to a percentage. Cosmetic.
    pub probability: f64,
    /// Cosmetic display value, not a statistical confidence.
    pub confidence: f64,
}

impl FlipPredictor {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(&self, seeds: &SeedPair) -> Result<FlipPrediction> {
        if !seeds.is_complete() {
            return Err(GameError::EmptySeed);
        }

        let draw = draw_binary(seeds.seed());
        let outcome = match draw.outcome {
            BinaryOutcome::A => CoinSide::Heads,
            BinaryOutcome::B => CoinSide::Tails,
        };

        Ok(FlipPrediction {
            outcome,
            probability: draw.raw_fraction * 100.0,
            confidence: 60.0 + draw.raw_fraction * 35.0,
        })
    }
}
