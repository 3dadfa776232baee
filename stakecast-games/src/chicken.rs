use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use stakecast_core::{draw_subset, SeedPair};

/// Chicken difficulty, part of the seed discriminator. Each level fixes the
/// board size and how many cells hide bones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChickenDifficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl ChickenDifficulty {
    /// Lowercase name as it appears in the combined seed string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChickenDifficulty::Easy => "easy",
            ChickenDifficulty::Medium => "medium",
            ChickenDifficulty::Hard => "hard",
            ChickenDifficulty::Expert => "expert",
        }
    }

    pub fn grid_cells(&self) -> usize {
        match self {
            ChickenDifficulty::Easy => 16,
            ChickenDifficulty::Medium => 20,
            ChickenDifficulty::Hard => 25,
            ChickenDifficulty::Expert => 30,
        }
    }

    /// Column count for rendering the board.
    pub fn columns(&self) -> usize {
        match self {
            ChickenDifficulty::Easy => 4,
            ChickenDifficulty::Medium | ChickenDifficulty::Hard => 5,
            ChickenDifficulty::Expert => 6,
        }
    }

    pub fn bones(&self) -> usize {
        match self {
            ChickenDifficulty::Easy => 3,
            ChickenDifficulty::Medium => 5,
            ChickenDifficulty::Hard => 8,
            ChickenDifficulty::Expert => 12,
        }
    }
}

/// Chicken predictor: safe cells on a difficulty-sized board.
#[derive(Debug, Clone)]
pub struct ChickenPredictor {
    difficulty: ChickenDifficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChickenPrediction {
    pub safe_cells: Vec<usize>,
    pub grid_cells: usize,
    pub bones: usize,
    pub difficulty: ChickenDifficulty,
}

impl ChickenPredictor {
    pub fn new(difficulty: ChickenDifficulty) -> Self {
        Self { difficulty }
    }

    pub fn predict(&self, seeds: &SeedPair) -> Result<ChickenPrediction> {
        if !seeds.is_complete() {
            return Err(GameError::EmptySeed);
        }

        let grid_cells = self.difficulty.grid_cells();
        let safe_count = grid_cells - self.difficulty.bones();
        let seed = seeds.seed_with(self.difficulty.as_str());
        let safe_cells = draw_subset(seed, grid_cells, safe_count);

        tracing::debug!(
            difficulty = self.difficulty.as_str(),
            safe = safe_cells.len(),
            "chicken prediction generated"
        );

        Ok(ChickenPrediction {
            safe_cells,
            grid_cells,
            bones: self.difficulty.bones(),
            difficulty: self.difficulty,
        })
    }
}
