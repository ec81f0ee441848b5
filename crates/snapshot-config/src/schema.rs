// crates/snapshot-config/src/schema.rs
// ============================================================================
// Module: Overrides Schema
// Description: JSON schema builder for snapshot-overrides.toml.
// Purpose: Provide canonical validation schema for overrides artifacts.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for the snapshot overrides file. The
//! schema is generated from the canonical model and its limits; tests keep
//! the embedded defaults aligned with the runtime defaults.

use serde_json::Value;
use serde_json::json;

use crate::config::DEFAULT_PRECISION;
use crate::overrides::MAX_SAMPLE_ENTRIES;
use crate::overrides::MAX_SAMPLE_NAME_LENGTH;

/// Returns the JSON schema for `snapshot-overrides.toml`.
#[must_use]
pub fn overrides_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "snapshot-config://schemas/overrides.schema.json",
        "title": "Snapshot Overrides",
        "description": "Per-sample overrides for snapshot comparison settings.",
        "type": "object",
        "properties": {
            "samples": {
                "type": "array",
                "items": sample_override_schema(),
                "maxItems": MAX_SAMPLE_ENTRIES,
                "default": []
            }
        },
        "additionalProperties": false
    })
}

/// Schema for a single sample override entry.
fn sample_override_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": {
                "type": "string",
                "minLength": 1,
                "maxLength": MAX_SAMPLE_NAME_LENGTH,
                "description": "Sample name the entry applies to (exact-match key)."
            },
            "precision": {
                "type": "number",
                "exclusiveMinimum": 0.0,
                "maximum": 1.0,
                "default": DEFAULT_PRECISION,
                "description": "Required similarity when diffing against the reference image."
            },
            "use_experimental_engine": {
                "type": "boolean",
                "default": false,
                "description": "Render the candidate image with the experimental engine."
            }
        },
        "required": ["name"],
        "anyOf": [
            { "required": ["precision"] },
            { "required": ["use_experimental_engine"] }
        ],
        "additionalProperties": false
    })
}
