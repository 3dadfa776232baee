//! Game-level predictors on top of the stakecast draw engine.
//!
//! Each game is a thin typed caller of `stakecast-core` that owns its board
//! constants, parameter validation, the non-empty-seed policy and the
//! display-only derived values (confidence figures, targets, risk labels).

pub mod chicken;
pub mod commitment;
pub mod crash;
pub mod dice;
pub mod error;
pub mod flip;
pub mod keno;
pub mod limbo;
pub mod mines;
pub mod wheel;

pub use chicken::{ChickenDifficulty, ChickenPrediction, ChickenPredictor};
pub use commitment::{generate_server_seed, SeedCommitment};
pub use crash::{CrashPrediction, CrashPredictor};
pub use dice::{DicePrediction, DicePredictor, DiceZone};
pub use error::{GameError, Result};
pub use flip::{CoinSide, FlipPrediction, FlipPredictor};
pub use keno::{KenoPrediction, KenoPredictor};
pub use limbo::{LimboPrediction, LimboPredictor, RiskLevel};
pub use mines::{MinesPrediction, MinesPredictor};
pub use wheel::{WheelPrediction, WheelPredictor, WheelRisk};

pub use stakecast_core::SeedPair;
