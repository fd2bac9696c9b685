//! package.json dependency pruning.
//!
//! The manifest is treated as structured data, not text: parse, delete keys
//! from both dependency groupings, serialize back only when something was
//! actually removed. `serde_json` is built with `preserve_order`, so every
//! surviving key keeps its position and unrelated entries re-serialize
//! verbatim.

use serde_json::Value;

use crate::domain::error::DomainError;

/// The two groupings a package may live under.
const DEPENDENCY_GROUPS: [&str; 2] = ["dependencies", "devDependencies"];

/// Parse manifest text into a JSON object.
pub fn parse(text: &str) -> Result<Value, DomainError> {
    let value: Value = serde_json::from_str(text).map_err(|e| DomainError::MalformedManifest {
        reason: e.to_string(),
    })?;
    if !value.is_object() {
        return Err(DomainError::MalformedManifest {
            reason: format!("expected an object, found {}", json_kind(&value)),
        });
    }
    Ok(value)
}

/// Delete each named package from `dependencies` and `devDependencies`.
/// Returns how many entries were removed; `0` means the caller must not
/// rewrite the file.
pub fn prune_packages(manifest: &mut Value, packages: &[&str]) -> usize {
    let mut removed = 0;
    for group in DEPENDENCY_GROUPS {
        let Some(deps) = manifest.get_mut(group).and_then(Value::as_object_mut) else {
            continue;
        };
        for package in packages {
            if deps.remove(*package).is_some() {
                removed += 1;
            }
        }
    }
    removed
}

/// Serialize with the formatting the template ecosystem expects:
/// two-space indentation, no trailing newline.
pub fn to_pretty(manifest: &Value) -> String {
    // A Value serializes to valid JSON; pretty-printing cannot fail here.
    serde_json::to_string_pretty(manifest).unwrap_or_default()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
