//! APNS family payload.
//!
//! Shape: `{ <custom pairs>, "aps": { "alert": { ... } } }`. Custom data
//! lives at the payload root, never inside `aps`; on a key collision `aps`
//! wins. Body and `loc-key` are mutually exclusive in the alert, as are
//! title and `title-loc-key`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::message::Message;
use crate::payload::non_empty;

#[derive(Debug, Serialize)]
struct Aps<'a> {
    alert: Alert<'a>,
}

/// `aps.alert` object. Field order is the wire order.
#[derive(Debug, Serialize)]
struct Alert<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
    #[serde(rename = "loc-key", skip_serializing_if = "Option::is_none")]
    loc_key: Option<&'a str>,
    #[serde(rename = "loc-args", skip_serializing_if = "Option::is_none")]
    loc_args: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(rename = "title-loc-key", skip_serializing_if = "Option::is_none")]
    title_loc_key: Option<&'a str>,
    #[serde(rename = "title-loc-args", skip_serializing_if = "Option::is_none")]
    title_loc_args: Option<&'a [String]>,
}

/// Render the APNS payload for `msg` with `body` as the alert text.
pub fn render(msg: &Message, body: Option<&str>) -> Result<String> {
    let loc = msg.localized_key.as_deref();
    let title_loc = msg.title_localized_key.as_deref();

    let alert = Alert {
        body: if loc.is_none() { body } else { None },
        loc_key: loc,
        loc_args: if loc.is_some() {
            non_empty(&msg.localized_arguments)
        } else {
            None
        },
        title: if title_loc.is_none() {
            msg.title.as_deref()
        } else {
            None
        },
        title_loc_key: title_loc,
        title_loc_args: if title_loc.is_some() {
            non_empty(&msg.title_localized_arguments)
        } else {
            None
        },
    };

    let mut root: Map<String, Value> = msg.custom.clone();
    root.insert("aps".to_string(), serde_json::to_value(Aps { alert })?);
    Ok(serde_json::to_string(&Value::Object(root))?)
}
