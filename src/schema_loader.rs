//! Shared JSON Schema loader for the snapshot payload contracts.
//!
//! Keeps creature and type payload handling aligned: both loaders compile
//! the schema under `schema/` and validate the normalized payload before any
//! deserialization happens, so malformed exports fail with field-level
//! messages instead of half-parsed structs.

use anyhow::{Context, Result};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// A compiled schema plus the backing document.
///
/// `raw` must outlive `compiled`; the compile step borrows the document, so
/// the Arc is held here to keep the `'static` reference handed to
/// `JSONSchema::compile` valid.
pub(crate) struct CompiledSchema {
    pub compiled: JSONSchema,
    #[allow(dead_code)]
    raw: Arc<Value>,
}

pub(crate) fn load_json_schema(path: &Path) -> Result<CompiledSchema> {
    let schema_value: Value = serde_json::from_reader(BufReader::new(
        File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
    ))
    .with_context(|| format!("parsing schema {}", path.display()))?;

    let raw = Arc::new(schema_value);
    let raw_static: &'static Value = unsafe { &*(Arc::as_ptr(&raw)) };
    let compiled = JSONSchema::compile(raw_static)
        .with_context(|| format!("compiling schema {}", path.display()))?;

    Ok(CompiledSchema { compiled, raw })
}
