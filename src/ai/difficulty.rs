//! Difficulty knob for the computer opponent.

use serde::{Deserialize, Serialize};

/// Probability in [0, 1] that the opponent plays the optimal move
/// instead of a uniformly random legal one, sampled once per AI turn.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Difficulty(f64);

/// Error for difficulty values outside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
#[display("Difficulty {} is outside the range 0.0..=1.0", _0)]
pub struct DifficultyError(pub f64);

impl std::error::Error for DifficultyError {}

impl Difficulty {
    /// Every move is chosen uniformly at random.
    pub const RANDOM: Self = Self(0.0);

    /// Every move comes from the exhaustive search.
    pub const PERFECT: Self = Self(1.0);

    /// Creates a difficulty, rejecting values outside [0, 1] and NaN.
    pub fn new(value: f64) -> Result<Self, DifficultyError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DifficultyError(value))
        }
    }

    /// Creates a difficulty, saturating out-of-range input to the
    /// nearest bound. NaN maps to full strength.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::PERFECT;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the inner probability.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::PERFECT
    }
}

impl TryFrom<f64> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for f64 {
    fn from(difficulty: Difficulty) -> f64 {
        difficulty.0
    }
}
