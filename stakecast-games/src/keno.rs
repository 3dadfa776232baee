use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use stakecast_core::{draw_subset, SeedPair};

pub const TOTAL_NUMBERS: usize = 40;
pub const NUMBERS_TO_SELECT: usize = 10;

/// Keno predictor: ten "lucky numbers" out of 1..=40, reported sorted.
#[derive(Debug, Clone, Default)]
pub struct KenoPredictor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KenoPrediction {
    pub lucky_numbers: Vec<u32>,
}

impl KenoPredictor {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(&self, seeds: &SeedPair) -> Result<KenoPrediction> {
        if !seeds.is_complete() {
            return Err(GameError::EmptySeed);
        }

        // draw over [0, 40), then shift to the 1-based board numbering
        let mut lucky_numbers: Vec<u32> = draw_subset(seeds.seed(), TOTAL_NUMBERS, NUMBERS_TO_SELECT)
            .into_iter()
            .map(|i| i as u32 + 1)
            .collect();
        lucky_numbers.sort_unstable();

        Ok(KenoPrediction { lucky_numbers })
    }
}
