use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use stakecast_core::{draw_scalar, fraction, Curve, SeedPair};

/// Crash predictor: a crash point in [1, 50) and a recommended exit at 80%
/// of it.
#[derive(Debug, Clone, Default)]
pub struct CrashPredictor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrashPrediction {
    pub crash_point: f64,
    /// 80% of the predicted crash point.
    pub safe_exit: f64,
    /// Cosmetic display value, not a statistical confidence.
    pub confidence: f64,
}

impl CrashPredictor {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(&self, seeds: &SeedPair) -> Result<CrashPrediction> {
        if !seeds.is_complete() {
            return Err(GameError::EmptySeed);
        }

        let seed = seeds.seed();
        let f = fraction(seed, 0);
        let crash_point = draw_scalar(seed, 1.0, 50.0, Curve::Linear)?;

        Ok(CrashPrediction {
            crash_point,
            safe_exit: crash_point * 0.8,
            confidence: 70.0 + f * 20.0,
        })
    }
}
