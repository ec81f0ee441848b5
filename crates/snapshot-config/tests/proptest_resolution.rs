// crates/snapshot-config/tests/proptest_resolution.rs
// ============================================================================
// Module: Resolution Property-Based Tests
// Description: Property tests for resolution totality and fallthrough.
// Purpose: Detect panics and invariants across wide name ranges.
// ============================================================================

//! Property-based tests for resolution invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use snapshot_config::OverrideTable;
use snapshot_config::PRIVATE_SAMPLE_PREFIX;
use snapshot_config::SnapshotConfiguration;
use snapshot_config::builtin_overrides;

proptest! {
    #[test]
    fn resolution_is_total_and_valid(name in ".*") {
        let resolved = SnapshotConfiguration::for_sample(&name);
        prop_assert!(resolved.validate().is_ok());
    }

    #[test]
    fn unlisted_names_fall_through(name in "[A-Za-z0-9_/]{0,40}") {
        prop_assume!(builtin_overrides().get(&name).is_none());
        let resolved = SnapshotConfiguration::for_sample(&name);
        prop_assert_eq!(resolved.precision, 1.0);
        let expected_engine = name.starts_with(PRIVATE_SAMPLE_PREFIX);
        prop_assert_eq!(resolved.use_experimental_engine, expected_engine);
    }

    #[test]
    fn unlisted_private_names_use_experimental_engine(suffix in "[A-Za-z0-9_]{0,32}") {
        let name = format!("{PRIVATE_SAMPLE_PREFIX}{suffix}");
        prop_assume!(builtin_overrides().get(&name).is_none());
        let resolved = SnapshotConfiguration::for_sample(&name);
        prop_assert_eq!(resolved, SnapshotConfiguration::default_for_private_samples());
    }

    #[test]
    fn merged_tables_prefer_extra_entries(
        name in "[A-Za-z][A-Za-z0-9_]{0,15}",
        precision in 0.01_f32..=1.0_f32,
    ) {
        let configuration = SnapshotConfiguration::precision(precision);
        let extra = OverrideTable::from_entries([(name.clone(), configuration)]);
        let merged = builtin_overrides().merged(&extra);
        prop_assert_eq!(merged.resolve(&name), configuration);
    }
}
