//! Session configuration.
//!
//! Grid dimensions are validated here, before a session exists, so an
//! invalid configuration never reaches the rules.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Smallest allowed grid dimension.
pub const MIN_DIMENSION: u8 = 2;

/// Largest allowed grid dimension.
pub const MAX_DIMENSION: u8 = 10;

/// Default mismatch reveal delay in milliseconds.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1000;

/// Validated grid dimensions.
///
/// Both dimensions lie in `[MIN_DIMENSION, MAX_DIMENSION]` and the card
/// count `rows * cols` is even.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct GridConfig {
    rows: u8,
    cols: u8,
}

#[derive(Deserialize)]
struct RawGrid {
    rows: u8,
    cols: u8,
}

impl TryFrom<RawGrid> for GridConfig {
    type Error = GameError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        GridConfig::new(raw.rows, raw.cols)
    }
}

impl GridConfig {
    /// Validate and create grid dimensions.
    ///
    /// ```
    /// use memory_match::core::GridConfig;
    ///
    /// assert!(GridConfig::new(4, 4).is_ok());
    /// assert!(GridConfig::new(3, 3).is_err()); // odd card count
    /// assert!(GridConfig::new(1, 4).is_err()); // too small
    /// ```
    pub fn new(rows: u8, cols: u8) -> Result<Self, GameError> {
        let invalid = |reason| GameError::InvalidConfiguration { rows, cols, reason };

        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&rows) {
            return Err(invalid("rows must be between 2 and 10"));
        }
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&cols) {
            return Err(invalid("columns must be between 2 and 10"));
        }
        if (u16::from(rows) * u16::from(cols)) % 2 != 0 {
            return Err(invalid("total card count must be even"));
        }

        Ok(Self { rows, cols })
    }

    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.card_count() / 2
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 4, cols: 4 }
    }
}

/// Tunables shared by every session an engine starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How long a mismatched pair stays face-up before turning back over.
    pub reveal_delay_ms: u64,

    /// Shuffle seed. `None` draws one from system entropy.
    /// The same seed deals the same decks, restarts included.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Use a custom reveal delay.
    pub fn with_reveal_delay(mut self, delay_ms: u64) -> Self {
        self.reveal_delay_ms = delay_ms;
        self
    }

    /// Use a fixed shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
