//! Custom-data re-encoding for platform data sections.
//!
//! GCM and APNS accept arbitrary JSON, so custom pairs pass through verbatim.
//! ADM only accepts string values: scalars render to their literal form and
//! anything structured moves to a `<key>_json` entry holding its JSON
//! encoding.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::Result;

/// Suffix for keys whose value had to be JSON-encoded to fit a string-only
/// data section.
pub const JSON_SUFFIX: &str = "_json";

/// Merge custom pairs into a JSON-tolerant data section verbatim.
/// Later inserts win, so custom data may override builder-set keys.
pub fn merge_verbatim(data: &mut Map<String, Value>, custom: &Map<String, Value>) {
    for (key, value) in custom {
        data.insert(key.clone(), value.clone());
    }
}

/// Flatten custom pairs into a string-only data section.
///
/// Strings pass unchanged, numbers and booleans render to their JSON literal
/// form. Arrays, objects, and `null` are JSON-encoded under the suffixed key;
/// the bare key is dropped.
pub fn flatten_to_strings(
    data: &mut BTreeMap<String, String>,
    custom: &Map<String, Value>,
) -> Result<()> {
    for (key, value) in custom {
        match value {
            Value::String(s) => {
                data.insert(key.clone(), s.clone());
            }
            Value::Number(n) => {
                data.insert(key.clone(), n.to_string());
            }
            Value::Bool(b) => {
                data.insert(key.clone(), b.to_string());
            }
            structured => {
                data.insert(
                    format!("{key}{JSON_SUFFIX}"),
                    serde_json::to_string(structured)?,
                );
            }
        }
    }
    Ok(())
}
