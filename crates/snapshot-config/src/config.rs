// crates/snapshot-config/src/config.rs
// ============================================================================
// Module: Snapshot Configuration
// Description: Per-sample comparison settings and the resolution entry point.
// Purpose: Map sample names to effective comparison settings, total and pure.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! `SnapshotConfiguration` describes how a rendered sample is compared
//! against its stored reference image: the required similarity threshold and
//! the rendering engine that produces the candidate image. Resolution never
//! fails; samples without a custom entry are exercised at full precision
//! through the stable engine.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::table::builtin_overrides;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default similarity threshold: the snapshot must match exactly.
pub const DEFAULT_PRECISION: f32 = 1.0;

// ============================================================================
// SECTION: Configuration Type
// ============================================================================

/// Comparison settings for an individual snapshot test case.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SnapshotConfiguration {
    /// Required similarity in `(0.0, 1.0]` when diffing the captured
    /// snapshot against the reference image. Lowered only for samples that
    /// render nondeterministically, and kept as high as the diff permits.
    #[serde(default = "default_precision")]
    pub precision: f32,
    /// Renders the candidate image with the experimental engine instead of
    /// the stable one. Defaults to false while the experimental engine
    /// supports a relatively small number of samples.
    #[serde(default)]
    pub use_experimental_engine: bool,
}

impl Default for SnapshotConfiguration {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            use_experimental_engine: false,
        }
    }
}

impl SnapshotConfiguration {
    /// Returns the default configuration with `precision` replaced.
    #[must_use]
    pub const fn precision(precision: f32) -> Self {
        Self {
            precision,
            use_experimental_engine: false,
        }
    }

    /// Returns the default configuration with the experimental engine
    /// selected.
    #[must_use]
    pub const fn experimental_engine() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            use_experimental_engine: true,
        }
    }

    /// Returns the configuration applied to unlisted samples under
    /// `Private/`.
    #[must_use]
    pub const fn default_for_private_samples() -> Self {
        Self::experimental_engine()
    }

    /// Resolves the effective configuration for a sample name against the
    /// built-in override table.
    ///
    /// Total over all inputs: an exact table entry wins, otherwise unlisted
    /// `Private/` samples get [`Self::default_for_private_samples`], and
    /// everything else gets the default.
    #[must_use]
    pub fn for_sample(name: &str) -> Self {
        builtin_overrides().resolve(name)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `precision` is not a finite value in
    /// `(0.0, 1.0]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.precision.is_finite() {
            return Err(ConfigError::Invalid("precision must be finite".to_string()));
        }
        if self.precision <= 0.0 || self.precision > DEFAULT_PRECISION {
            return Err(ConfigError::Invalid(
                "precision must be in (0.0, 1.0]".to_string(),
            ));
        }
        Ok(())
    }
}

/// Returns the default precision for serde defaults.
const fn default_precision() -> f32 {
    DEFAULT_PRECISION
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Override loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading an overrides file.
    #[error("overrides io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("overrides parse error: {0}")]
    Parse(String),
    /// Invalid override data.
    #[error("invalid overrides: {0}")]
    Invalid(String),
}
