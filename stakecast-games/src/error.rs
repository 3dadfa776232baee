use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("client and server seeds must both be non-empty")]
    EmptySeed,

    #[error("mine count {0} out of range 1..=24")]
    MineCountOutOfRange(u8),

    #[error("unsupported segment count: {0} (expected 10, 20, 30, 40 or 50)")]
    UnsupportedSegments(u32),

    #[error("commitment digest is not a 64-character hex string: {0}")]
    MalformedDigest(String),

    #[error("engine error: {0}")]
    Engine(#[from] stakecast_core::EngineError),
}
