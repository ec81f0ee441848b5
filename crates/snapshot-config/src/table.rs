// crates/snapshot-config/src/table.rs
// ============================================================================
// Module: Override Table
// Description: Immutable sample-name to configuration mapping with lookup.
// Purpose: Hold override entries and resolve names with exact precedence.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The override table maps sample names (flat, like `Switch`, or
//! slash-namespaced, like `Issues/issue_1407`) to custom comparison
//! settings. Lookup precedence is fixed: an exact entry always wins, then
//! the `Private/` prefix rule, then the default configuration. Tables are
//! constructed once and never mutated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::config::SnapshotConfiguration;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Path prefix for private samples, which default to the experimental
/// engine.
pub const PRIVATE_SAMPLE_PREFIX: &str = "Private/";

// ============================================================================
// SECTION: Override Table
// ============================================================================

/// Immutable mapping from sample name to comparison settings.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    /// Override entries keyed by exact sample name.
    entries: BTreeMap<String, SnapshotConfiguration>,
}

impl OverrideTable {
    /// Builds a table from `(name, configuration)` pairs. Later pairs win on
    /// duplicate names.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, SnapshotConfiguration)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Resolves the effective configuration for a sample name.
    ///
    /// Precedence: exact table entry, then the [`PRIVATE_SAMPLE_PREFIX`]
    /// rule for unlisted private samples, then the default configuration.
    /// Total over all inputs; never fails.
    #[must_use]
    pub fn resolve(&self, name: &str) -> SnapshotConfiguration {
        if let Some(configuration) = self.entries.get(name) {
            return *configuration;
        }
        if name.starts_with(PRIVATE_SAMPLE_PREFIX) {
            return SnapshotConfiguration::default_for_private_samples();
        }
        SnapshotConfiguration::default()
    }

    /// Returns the stored entry for an exact sample name, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SnapshotConfiguration> {
        self.entries.get(name)
    }

    /// Returns an iterator over the stored entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &SnapshotConfiguration)> {
        self.entries.iter().map(|(name, configuration)| (name.as_str(), configuration))
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a new table layering `extra` over this table. Entries from
    /// `extra` win on name collision.
    #[must_use]
    pub fn merged(&self, extra: &Self) -> Self {
        let mut entries = self.entries.clone();
        for (name, configuration) in &extra.entries {
            entries.insert(name.clone(), *configuration);
        }
        Self {
            entries,
        }
    }
}

// ============================================================================
// SECTION: Built-In Overrides
// ============================================================================

/// Returns the built-in override table for samples that cannot use the
/// default configuration.
#[must_use]
pub fn builtin_overrides() -> &'static OverrideTable {
    &BUILTIN_OVERRIDES
}

/// Built-in override entries, constructed once per process.
static BUILTIN_OVERRIDES: LazyLock<OverrideTable> = LazyLock::new(|| {
    // These samples render slightly differently depending on the test
    // environment, so precision is lowered just enough for the diff to pass.
    let reduced_precision: [(&str, f32); 3] = [
        ("Issues/issue_1407", 0.9),
        ("Nonanimating/FirstText", 0.99),
        ("Nonanimating/verifyLineHeight", 0.99),
    ];
    // Samples known to render correctly on the experimental engine.
    let experimental_engine: [&str; 16] = [
        "PinJump",
        "Switch",
        "Switch_States",
        "TwitterHeart",
        "TwitterHeartButton",
        "HamburgerArrow",
        "vcTransition1",
        "vcTransition2",
        "Nonanimating/Zoom",
        "Nonanimating/GeometryTransformTest",
        "LottieFiles/loading_dots_1",
        "LottieFiles/loading_dots_2",
        "LottieFiles/loading_dots_3",
        "9squares_AlBoardman",
        "LottieLogo1_masked",
        "MotionCorpse_Jrcanest",
    ];
    let mut entries: Vec<(String, SnapshotConfiguration)> = Vec::new();
    for (name, precision) in reduced_precision {
        entries.push((name.to_string(), SnapshotConfiguration::precision(precision)));
    }
    for name in experimental_engine {
        entries.push((name.to_string(), SnapshotConfiguration::experimental_engine()));
    }
    OverrideTable::from_entries(entries)
});
