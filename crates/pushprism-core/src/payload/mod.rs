//! Platform payload builders.
//!
//! This module hosts one renderer per builder family:
//! - APNS family: `aps.alert` object, custom data at the payload root.
//! - GCM: fixed five-key object, JSON-tolerant `data` section.
//! - ADM: two-key object, string-only `data` section.
//!
//! All builders are panic-free and pure: the same message and body always
//! render the same bytes, so a payload can be re-rendered after body
//! truncation without drift.

pub mod adm;
pub mod apns;
pub mod gcm;

use crate::error::Result;
use crate::message::Message;
use crate::platform::Family;

/// Render the payload JSON for one builder family.
///
/// `body` is the notification text to embed, passed separately from the
/// message so the size validator can re-render with a shortened copy without
/// touching the message. `None` means no body at all.
pub fn render(family: Family, msg: &Message, body: Option<&str>) -> Result<String> {
    match family {
        Family::Apns => apns::render(msg, body),
        Family::Gcm => gcm::render(msg, body),
        Family::Adm => adm::render(msg, body),
    }
}

/// True when the rendered payload embeds the body text, so shortening the
/// body can shrink it. The APNS alert swaps the body out for the
/// localization key; GCM and ADM lose theirs when a custom pair lands on the
/// `message` data key after the builder wrote it.
pub fn embeds_body(family: Family, msg: &Message) -> bool {
    match family {
        Family::Apns => msg.localized_key.is_none(),
        Family::Gcm => !msg.custom.contains_key("message"),
        // Scalar custom values overwrite `data.message`; structured ones
        // land under `message_json` and leave the body in place.
        Family::Adm => match msg.custom.get("message") {
            Some(value) => !(value.is_string() || value.is_number() || value.is_boolean()),
            None => true,
        },
    }
}

pub(crate) fn non_empty(args: &[String]) -> Option<&[String]> {
    if args.is_empty() {
        None
    } else {
        Some(args)
    }
}
