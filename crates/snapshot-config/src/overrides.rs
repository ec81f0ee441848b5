// crates/snapshot-config/src/overrides.rs
// ============================================================================
// Module: Overrides File
// Description: Loading and validation for snapshot-overrides.toml.
// Purpose: Provide strict, fail-closed override ingestion with hard limits.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! Test authors can extend the built-in override table with a TOML file.
//! The file is loaded from an explicit path, the `SNAPSHOT_OVERRIDES`
//! environment variable, or `snapshot-overrides.toml` in the working
//! directory. Missing fields keep their defaults; invalid entries fail
//! closed so a typo never silently relaxes a comparison.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::config::ConfigError;
use crate::config::SnapshotConfiguration;
use crate::table::OverrideTable;
use crate::table::builtin_overrides;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default overrides filename when no path is specified.
const DEFAULT_OVERRIDES_NAME: &str = "snapshot-overrides.toml";
/// Environment variable used to override the overrides path.
pub(crate) const OVERRIDES_ENV_VAR: &str = "SNAPSHOT_OVERRIDES";
/// Maximum overrides file size in bytes.
pub(crate) const MAX_OVERRIDES_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a sample name.
pub(crate) const MAX_SAMPLE_NAME_LENGTH: usize = 512;
/// Maximum number of sample entries in an overrides file.
pub(crate) const MAX_SAMPLE_ENTRIES: usize = 4096;

// ============================================================================
// SECTION: Overrides Model
// ============================================================================

/// Test-author overrides file for per-sample comparison settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotOverridesFile {
    /// Per-sample override entries.
    #[serde(default)]
    pub samples: Vec<SampleOverride>,
}

impl SnapshotOverridesFile {
    /// Loads an overrides file from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_OVERRIDES_FILE_SIZE {
            return Err(ConfigError::Invalid("overrides file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("overrides file must be utf-8".to_string()))?;
        let overrides: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        overrides.validate()?;
        Ok(overrides)
    }

    /// Validates the overrides for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any entry is invalid or a sample name is
    /// repeated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples.len() > MAX_SAMPLE_ENTRIES {
            return Err(ConfigError::Invalid("too many sample entries".to_string()));
        }
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for (idx, entry) in self.samples.iter().enumerate() {
            entry
                .validate()
                .map_err(|err| ConfigError::Invalid(format!("samples[{idx}]: {err}")))?;
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "samples[{idx}]: duplicate sample name {}",
                    entry.name
                )));
            }
        }
        Ok(())
    }

    /// Converts the validated entries into an override table.
    #[must_use]
    pub fn into_table(self) -> OverrideTable {
        OverrideTable::from_entries(
            self.samples.into_iter().map(|entry| {
                let configuration = entry.configuration();
                (entry.name, configuration)
            }),
        )
    }
}

/// Single per-sample override entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleOverride {
    /// Sample name the entry applies to (exact-match key).
    pub name: String,
    /// Replacement similarity threshold in `(0.0, 1.0]`.
    #[serde(default)]
    pub precision: Option<f32>,
    /// Replacement rendering engine selection.
    #[serde(default)]
    pub use_experimental_engine: Option<bool>,
}

impl SampleOverride {
    /// Validates a single override entry.
    fn validate(&self) -> Result<(), ConfigError> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid("name must be non-empty".to_string()));
        }
        if trimmed != self.name {
            return Err(ConfigError::Invalid(
                "name must not have leading or trailing whitespace".to_string(),
            ));
        }
        if self.name.len() > MAX_SAMPLE_NAME_LENGTH {
            return Err(ConfigError::Invalid("name exceeds max length".to_string()));
        }
        if self.precision.is_none() && self.use_experimental_engine.is_none() {
            return Err(ConfigError::Invalid(
                "entry must set precision or use_experimental_engine".to_string(),
            ));
        }
        self.configuration().validate()
    }

    /// Returns the effective configuration for this entry: the default with
    /// the entry's fields applied.
    #[must_use]
    pub fn configuration(&self) -> SnapshotConfiguration {
        let mut configuration = SnapshotConfiguration::default();
        if let Some(precision) = self.precision {
            configuration.precision = precision;
        }
        if let Some(use_experimental) = self.use_experimental_engine {
            configuration.use_experimental_engine = use_experimental;
        }
        configuration
    }
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Loads an overrides file and layers it over the built-in table. File
/// entries win on name collision.
///
/// # Errors
///
/// Returns [`ConfigError`] when loading or validation fails.
pub fn load_override_table(path: Option<&Path>) -> Result<OverrideTable, ConfigError> {
    let overrides = SnapshotOverridesFile::load(path)?;
    Ok(builtin_overrides().merged(&overrides.into_table()))
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the overrides path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(OVERRIDES_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("overrides path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_OVERRIDES_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("overrides path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("overrides path component too long".to_string()));
        }
    }
    Ok(())
}
