// crates/snapshot-config/src/lib.rs
// ============================================================================
// Module: Snapshot Config Library
// Description: Canonical snapshot comparison settings model and resolution.
// Purpose: Single source of truth for per-sample comparison semantics.
// Dependencies: serde, serde_json, thiserror, toml
// ============================================================================

//! ## Overview
//! `snapshot-config` resolves per-sample snapshot comparison settings for a
//! visual regression test suite: the similarity threshold required when a
//! rendered sample is diffed against its stored reference image, and which
//! rendering engine produces the candidate image. It provides the built-in
//! override table, strict fail-closed loading of test-author override files,
//! and deterministic generators for the overrides schema and example.
//!
//! Resolution itself is total and pure: every sample name maps to a valid
//! configuration, with unlisted samples falling through to the default.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;
pub mod overrides;
pub mod schema;
pub mod table;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::overrides_toml_example;
pub use overrides::*;
pub use schema::overrides_schema;
pub use table::*;
