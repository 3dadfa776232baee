use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use stakecast_core::{draw_scalar, fraction, Curve, SeedPair};

/// Limbo predictor: a long-tail multiplier in [1, 1000) via the cubic curve,
/// plus a conservative target and a risk label.
#[derive(Debug, Clone, Default)]
pub struct LimboPredictor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn for_multiplier(multiplier: f64) -> Self {
        if multiplier > 100.0 {
            RiskLevel::High
        } else if multiplier > 10.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimboPrediction {
    pub multiplier: f64,
    /// Conservative recommended cash-out point.
    pub target_multiplier: f64,
    pub risk: RiskLevel,
    /// Cosmetic display value, not a statistical confidence.
    pub confidence: f64,
}

impl LimboPredictor {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(&self, seeds: &SeedPair) -> Result<LimboPrediction> {
        if !seeds.is_complete() {
            return Err(GameError::EmptySeed);
        }

        let seed = seeds.seed();
        let f = fraction(seed, 0);
        let multiplier = draw_scalar(seed, 1.0, 1000.0, Curve::Cubic)?;

        Ok(LimboPrediction {
            multiplier,
            target_multiplier: multiplier.min(10.0) * 0.7,
            risk: RiskLevel::for_multiplier(multiplier),
            confidence: 50.0 + f * 40.0,
        })
    }
}
