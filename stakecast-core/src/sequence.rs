//! Reproducible fraction sequence.
//!
//! `fraction(seed, index)` is the `sin(seed) * 10000` fractional-part
//! generator. Reproducible and cheap but statistically weak; kept verbatim
//! so recorded predictions replay identically. Swapping in a stronger PRNG
//! would be a behavior change for every caller.

/// Pseudo-random fraction in `[0, 1)` for a seed and sequence index.
pub fn fraction(seed: u32, index: u64) -> f64 {
    let x = (seed as f64 + index as f64).sin() * 10_000.0;
    x - x.floor()
}
