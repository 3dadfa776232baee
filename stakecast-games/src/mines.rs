use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use stakecast_core::{draw_subset, SeedPair};

/// The Mines board is a fixed 5x5 grid.
pub const GRID_CELLS: usize = 25;

/// Mines predictor: marks the cells a player could open without hitting a
/// mine, for a chosen mine count.
#[derive(Debug, Clone)]
pub struct MinesPredictor {
    mine_count: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinesPrediction {
    pub safe_cells: Vec<usize>,
    pub mine_count: u8,
    pub grid_cells: usize,
}

impl MinesPredictor {
    pub fn new(mine_count: u8) -> Result<Self> {
        if !(1..=24).contains(&mine_count) {
            return Err(GameError::MineCountOutOfRange(mine_count));
        }
        Ok(Self { mine_count })
    }

    pub fn mine_count(&self) -> u8 {
        self.mine_count
    }

    pub fn predict(&self, seeds: &SeedPair) -> Result<MinesPrediction> {
        if !seeds.is_complete() {
            return Err(GameError::EmptySeed);
        }

        let safe_count = GRID_CELLS - self.mine_count as usize;
        let safe_cells = draw_subset(seeds.seed(), GRID_CELLS, safe_count);

        tracing::debug!(
            mine_count = self.mine_count,
            safe = safe_cells.len(),
            "mines prediction generated"
        );

        Ok(MinesPrediction {
            safe_cells,
            mine_count: self.mine_count,
            grid_cells: GRID_CELLS,
        })
    }
}
