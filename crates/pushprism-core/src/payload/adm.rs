//! ADM payload.
//!
//! Shape: `{ "data": { ... }, "expiresAfter": <ttl|null> }`. ADM rejects
//! anything but string values inside `data`, so the localized argument list
//! and structured custom values are JSON-encoded under `_json`-suffixed keys.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::custom::{self, JSON_SUFFIX};
use crate::error::Result;
use crate::message::Message;
use crate::payload::non_empty;

#[derive(Debug, Serialize)]
struct AdmPayload {
    data: BTreeMap<String, String>,
    #[serde(rename = "expiresAfter")]
    expires_after: Option<u64>,
}

/// Render the ADM payload for `msg` with `body` as the `data.message` value.
pub fn render(msg: &Message, body: Option<&str>) -> Result<String> {
    let mut data = BTreeMap::new();
    if let Some(text) = body {
        data.insert("message".to_string(), text.to_string());
    }
    if let Some(key) = &msg.localized_key {
        data.insert("message-loc-key".to_string(), key.clone());
        if let Some(args) = non_empty(&msg.localized_arguments) {
            data.insert(
                format!("message-loc-args{JSON_SUFFIX}"),
                serde_json::to_string(args)?,
            );
        }
    }
    custom::flatten_to_strings(&mut data, &msg.custom)?;

    let payload = AdmPayload {
        data,
        expires_after: msg.ttl,
    };
    Ok(serde_json::to_string(&payload)?)
}
