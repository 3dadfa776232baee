use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use stakecast_core::{draw_scalar, fraction, Curve, SeedPair};
use std::fmt;

/// Dice predictor: a roll in [0, 100) with an over/under call.
#[derive(Debug, Clone, Default)]
pub struct DicePredictor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiceZone {
    Over,
    Under,
}

impl fmt::Display for DiceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiceZone::Over => write!(f, "Over 50"),
            DiceZone::Under => write!(f, "Under 50"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DicePrediction {
    pub result: f64,
    pub zone: DiceZone,
    pub multiplier: f64,
    /// Cosmetic display value, not a statistical confidence.
    pub confidence: f64,
}

impl DicePredictor {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(&self, seeds: &SeedPair) -> Result<DicePrediction> {
        if !seeds.is_complete() {
            return Err(GameError::EmptySeed);
        }

        let seed = seeds.seed();
        let f = fraction(seed, 0);
        let result = draw_scalar(seed, 0.0, 100.0, Curve::Linear)?;

        Ok(DicePrediction {
            result,
            zone: if result > 50.0 {
                DiceZone::Over
            } else {
                DiceZone::Under
            },
            multiplier: 1.0 + f * 1.5,
            confidence: 60.0 + f * 30.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_in_range_with_consistent_zone() {
        for s in ["pq", "one", "two", "three"] {
            let p = DicePredictor::new()
                .predict(&SeedPair::new(s, "server"))
                .unwrap();
            assert!((0.0..100.0).contains(&p.result));
            assert_eq!(p.zone == DiceZone::Over, p.result > 50.0);
        }
    }

    #[test]
    fn test_derived_values_track_the_fraction() {
        let p = DicePredictor::new()
            .predict(&SeedPair::new("a", "b"))
            .unwrap();
        assert!((1.0..2.5).contains(&p.multiplier));
        assert!((60.0..90.0).contains(&p.confidence));
    }

    #[test]
    fn test_rejects_empty_seeds() {
        assert!(DicePredictor::new().predict(&SeedPair::new("", "")).is_err());
    }
}
