//! Stakecast core - deterministic seeded-draw engine
//!
//! This library turns a pair of user-supplied seed strings into reproducible
//! draw outcomes: a subset of indices, a scalar in a range, or a two-way
//! outcome. The generator is deliberately simple and reproducible; it is NOT
//! cryptographic and must never be presented as provably fair.

pub mod draw;
pub mod error;
pub mod hash;
pub mod sequence;
pub mod types;

pub use draw::{draw_binary, draw_scalar, draw_subset};
pub use error::{EngineError, Result};
pub use hash::hash_seed;
pub use sequence::fraction;
pub use types::{BinaryDraw, BinaryOutcome, Curve, DrawRequest, DrawResult, SeedPair};
