use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::deck::DECK_SIZE;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("card count must be between 1 and {max}, got {got}")]
    CardCount { got: usize, max: usize },
    #[error("radius must be a finite, non-negative number, got {0}")]
    Radius(f64),
}

/// How the first card is drawn while the pointer rests on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub radius: f64,
    pub scale: f64,
    pub brightness: f64,
    pub saturate: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        HoverConfig {
            radius: 276.0,
            scale: 1.0125,
            brightness: 1.175,
            saturate: 1.125,
        }
    }
}

/// Where the face-up card is shown, away from the ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealedSlotConfig {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale: f64,
    pub transition_secs: f64,
    pub brightness: f64,
    pub saturate: f64,
}

impl Default for RevealedSlotConfig {
    fn default() -> Self {
        RevealedSlotConfig {
            x: -320.0,
            y: 512.0,
            rotation: 180.0,
            scale: 1.25,
            transition_secs: 0.875,
            brightness: 1.175,
            saturate: 1.125,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    pub radius: f64,
    pub card_count: usize,
    /// Fixed shuffle seed; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    pub hover: HoverConfig,
    pub revealed_slot: RevealedSlotConfig,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            radius: 260.0,
            card_count: DECK_SIZE,
            seed: None,
            hover: HoverConfig::default(),
            revealed_slot: RevealedSlotConfig::default(),
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.card_count == 0 || self.card_count > DECK_SIZE {
            return Err(ConfigError::CardCount {
                got: self.card_count,
                max: DECK_SIZE,
            });
        }
        for radius in [self.radius, self.hover.radius] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(ConfigError::Radius(radius));
            }
        }
        Ok(())
    }
}
