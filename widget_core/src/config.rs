//! Widget configuration, loaded once and treated as immutable.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or validating a [`WidgetConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse widget config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("memory match needs at least one symbol")]
    NoMemorySymbols,

    #[error("word scramble needs at least one word")]
    NoScrambleWords,

    #[error("guess range {min}..={max} is empty")]
    EmptyGuessRange { min: u32, max: u32 },

    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Tunables for the mini-game and listing widgets.
///
/// Defaults mirror the values the site shipped with. Each widget instance
/// receives a reference at construction; nothing mutates the config at
/// runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Symbols duplicated into pairs for the memory-match board.
    pub memory_symbols: Vec<String>,

    /// How long two mismatched cards stay face up, in milliseconds.
    pub mismatch_delay_ms: u64,

    /// Candidate words for the scramble game.
    pub scramble_words: Vec<String>,

    /// Inclusive bounds for the guess-the-number target.
    pub guess_min: u32,
    pub guess_max: u32,

    /// Items shown per page on listing pages.
    pub page_size: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            memory_symbols: ["🍎", "🍌", "🍇", "🍉", "🍓", "🍒"]
                .map(String::from)
                .to_vec(),
            mismatch_delay_ms: 1000,
            scramble_words: ["code", "next", "react", "game", "fun", "ucode", "purple"]
                .map(String::from)
                .to_vec(),
            guess_min: 1,
            guess_max: 100,
            page_size: 6,
        }
    }
}

impl WidgetConfig {
    /// Parse a config from TOML and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        debug!(page_size = config.page_size, "loaded widget config");
        Ok(config)
    }

    /// Check the invariants the widgets rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_symbols.is_empty() {
            return Err(ConfigError::NoMemorySymbols);
        }
        if self.scramble_words.is_empty() {
            return Err(ConfigError::NoScrambleWords);
        }
        if self.guess_min > self.guess_max {
            return Err(ConfigError::EmptyGuessRange {
                min: self.guess_min,
                max: self.guess_max,
            });
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}
