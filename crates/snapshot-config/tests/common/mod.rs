// crates/snapshot-config/tests/common/mod.rs
// =============================================================================
// Module: Snapshot Config Test Helpers
// Description: Shared helpers for overrides and resolution tests.
// Purpose: Reduce duplication across integration tests for snapshot-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use snapshot_config::SnapshotConfiguration;
use snapshot_config::SnapshotOverridesFile;

/// Parses a TOML string into a `SnapshotOverridesFile` for tests.
pub fn overrides_from_toml(toml_str: &str) -> Result<SnapshotOverridesFile, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns an empty overrides file with all defaults applied.
pub fn minimal_overrides() -> Result<SnapshotOverridesFile, toml::de::Error> {
    overrides_from_toml("")
}

/// Checks a resolved configuration field-for-field.
pub fn assert_config(
    actual: SnapshotConfiguration,
    precision: f32,
    use_experimental_engine: bool,
) -> Result<(), String> {
    if actual.precision != precision {
        return Err(format!("precision mismatch: {} vs {precision}", actual.precision));
    }
    if actual.use_experimental_engine != use_experimental_engine {
        return Err(format!(
            "use_experimental_engine mismatch: {} vs {use_experimental_engine}",
            actual.use_experimental_engine
        ));
    }
    Ok(())
}
