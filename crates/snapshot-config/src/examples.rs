// crates/snapshot-config/src/examples.rs
// ============================================================================
// Module: Overrides Examples
// Description: Canonical example overrides payload.
// Purpose: Deterministic example for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for the snapshot overrides file. The output is
//! deterministic and kept in sync with the schema and validation by tests.

/// Returns a canonical example `snapshot-overrides.toml`.
#[must_use]
pub fn overrides_toml_example() -> String {
    String::from(
        r#"# Per-sample overrides layered on top of the built-in table.
# Entries win over built-ins on exact name collision.

[[samples]]
name = "Issues/issue_2042"
precision = 0.95

[[samples]]
name = "LottieFiles/gradient_shift"
use_experimental_engine = true

[[samples]]
name = "Nonanimating/BlurRadius"
precision = 0.99
use_experimental_engine = true
"#,
    )
}
