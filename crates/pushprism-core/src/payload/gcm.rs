//! GCM payload.
//!
//! Shape is a fixed five-key object: `data`, `collapse_key`, `time_to_live`,
//! `delay_while_idle`, `priority`. Unset TTL and priority serialize as
//! `null`; receivers rely on the keys always being present.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::custom;
use crate::error::Result;
use crate::message::{GcmPriority, Message};
use crate::payload::non_empty;

#[derive(Debug, Serialize)]
struct GcmPayload<'a> {
    data: Map<String, Value>,
    collapse_key: &'a str,
    time_to_live: Option<u64>,
    delay_while_idle: bool,
    priority: Option<GcmPriority>,
}

/// Render the GCM payload for `msg` with `body` as the `data.message` value.
pub fn render(msg: &Message, body: Option<&str>) -> Result<String> {
    let mut data = Map::new();
    if let Some(text) = body {
        data.insert("message".to_string(), Value::String(text.to_string()));
    }
    if let Some(key) = &msg.localized_key {
        data.insert("message-loc-key".to_string(), Value::String(key.clone()));
        if let Some(args) = non_empty(&msg.localized_arguments) {
            data.insert("message-loc-args".to_string(), serde_json::to_value(args)?);
        }
    }
    custom::merge_verbatim(&mut data, &msg.custom);

    let payload = GcmPayload {
        data,
        collapse_key: &msg.collapse_key,
        time_to_live: msg.ttl,
        delay_while_idle: msg.delay_while_idle,
        priority: msg.priority,
    };
    Ok(serde_json::to_string(&payload)?)
}
