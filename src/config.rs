//! Demo configuration
//!
//! Every demo parameter can be overridden from a JSON file. Missing fields
//! fall back to the built-in defaults, so a config only needs the values it
//! changes.

use geo::{Ease, Rect, Shaker, Vec2, VecGen};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode config: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub ease: EaseConfig,
    pub perlin: PerlinConfig,
    pub shake: ShakeConfig,
    pub vec_gen: VecGenConfig,
}

impl DemoConfig {
    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

// ============================================================================
// Ease
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EaseConfig {
    /// Seconds for one pass from start to end
    pub duration: f64,
    /// Seconds to hold before each pass
    pub wait: f64,
    /// Side length of each square
    pub size: f64,
    pub start_x: f64,
    pub start_y: f64,
    /// Distance from the right edge where squares stop
    pub end_margin: f64,
    pub curves: Vec<Ease>,
}

impl Default for EaseConfig {
    fn default() -> Self {
        Self {
            duration: 4.0,
            wait: 1.0,
            size: 5.0,
            start_x: 100.0,
            start_y: 30.0,
            end_margin: 20.0,
            curves: Ease::ALL.to_vec(),
        }
    }
}

// ============================================================================
// Perlin
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerlinConfig {
    /// Noise units per pixel
    pub scale: f64,
    pub octaves: u32,
    pub persistence: f64,
    /// Noise units per second along z
    pub rate: f64,
    /// Shuffle the permutation table; `None` uses the reference table
    pub seed: Option<u64>,
}

impl Default for PerlinConfig {
    fn default() -> Self {
        Self {
            scale: 0.01,
            octaves: 5,
            persistence: 0.5,
            rate: 0.3,
            seed: None,
        }
    }
}

// ============================================================================
// Shake
// ============================================================================

/// Which shaker output drives a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShakeMode {
    /// Position offset at full strength
    Constant,
    /// Position offset that decays over the shake duration
    Decaying,
    /// Rotation about the rect center, decaying
    Angle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShakyRectConfig {
    pub rect: Rect,
    pub shaker: Shaker,
    pub mode: ShakeMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeConfig {
    pub rects: Vec<ShakyRectConfig>,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            rects: vec![
                ShakyRectConfig {
                    rect: Rect::xywh(100.0, 100.0, 20.0, 20.0),
                    shaker: Shaker::new(10.0, 10.0),
                    mode: ShakeMode::Constant,
                },
                ShakyRectConfig {
                    rect: Rect::xywh(150.0, 100.0, 20.0, 20.0),
                    shaker: Shaker::new(20.0, 20.0)
                        .with_duration(2.0)
                        .with_falloff(Ease::OutQuad),
                    mode: ShakeMode::Decaying,
                },
                ShakyRectConfig {
                    rect: Rect::xywh(200.0, 100.0, 20.0, 20.0),
                    shaker: Shaker::new(FRAC_PI_3, 10.0)
                        .with_duration(0.5)
                        .with_falloff(Ease::OutQuad),
                    mode: ShakeMode::Angle,
                },
            ],
        }
    }
}

// ============================================================================
// Point clouds
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSetConfig {
    pub count: usize,
    pub generator: VecGen,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VecGenConfig {
    pub point_size: f64,
    pub sets: Vec<PointSetConfig>,
}

impl Default for VecGenConfig {
    fn default() -> Self {
        Self {
            point_size: 2.0,
            sets: vec![
                PointSetConfig {
                    count: 250,
                    generator: VecGen::offset(
                        VecGen::circle(0.0, 40.0),
                        VecGen::static_vec(Vec2::new(120.0, 80.0)),
                    ),
                },
                PointSetConfig {
                    count: 150,
                    generator: VecGen::offset(
                        VecGen::arc(30.0, 50.0, -FRAC_PI_2, FRAC_PI_4),
                        VecGen::static_vec(Vec2::new(220.0, 70.0)),
                    ),
                },
                PointSetConfig {
                    count: 300,
                    generator: VecGen::rects(vec![
                        Rect::xywh(80.0, 130.0, 200.0, 10.0), // Top
                        Rect::xywh(80.0, 190.0, 200.0, 10.0), // Bottom
                        Rect::xywh(80.0, 140.0, 20.0, 50.0),  // Left
                        Rect::xywh(260.0, 140.0, 20.0, 50.0), // Right
                    ]),
                },
            ],
        }
    }
}
