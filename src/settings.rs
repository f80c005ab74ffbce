//! Game configuration and preferences
//!
//! Grid size and seed come from command-line arguments or a JSON file; audio
//! preferences are kept separately.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_BRICKS_PER_ROW, DEFAULT_NUM_ROWS};

/// Errors produced while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("expected 0 or 2 arguments (bricks per row, rows), got {0}")]
    ArgumentCount(usize),
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be positive")]
    NotPositive { name: &'static str },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Level and simulation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Bricks in each grid row
    pub bricks_per_row: u32,
    /// Number of grid rows
    pub rows: u32,
    /// RNG seed (None = draw one at startup)
    pub seed: Option<u64>,
    /// Play a sound when a brick explodes
    pub explosion_sound: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bricks_per_row: DEFAULT_BRICKS_PER_ROW,
            rows: DEFAULT_NUM_ROWS,
            seed: None,
            explosion_sound: true,
        }
    }
}

impl GameConfig {
    /// Parse positional arguments: none, or `<bricks_per_row> <rows>`
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        match args {
            [] => Ok(Self::default()),
            [per_row, rows] => Ok(Self {
                bricks_per_row: parse_positive("bricks per row", per_row.as_ref())?,
                rows: parse_positive("rows", rows.as_ref())?,
                ..Self::default()
            }),
            _ => Err(ConfigError::ArgumentCount(args.len())),
        }
    }

    /// Load from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.bricks_per_row == 0 {
            return Err(ConfigError::NotPositive {
                name: "bricks per row",
            });
        }
        if config.rows == 0 {
            return Err(ConfigError::NotPositive { name: "rows" });
        }
        Ok(config)
    }

    /// Same configuration with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total bricks in a full grid
    pub fn brick_count(&self) -> u32 {
        self.bricks_per_row * self.rows
    }
}

fn parse_positive(name: &'static str, value: &str) -> Result<u32, ConfigError> {
    let parsed: u32 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })?;
    if parsed == 0 {
        return Err(ConfigError::NotPositive { name });
    }
    Ok(parsed)
}

/// Audio preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl AudioSettings {
    /// Effective playback volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0) * self.sfx_volume.clamp(0.0, 1.0)
        }
    }
}
