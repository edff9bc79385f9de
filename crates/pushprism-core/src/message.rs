//! Logical message model.
//!
//! One [`Message`] describes a notification once; the payload builders in
//! [`crate::payload`] turn it into per-platform JSON. The model is a plain
//! record: construct it, set fields, hand it to the envelope assembler. It is
//! never mutated during assembly.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::platform::Platform;

/// GCM collapse key used when the sender does not set one.
pub const NO_COLLAPSE: &str = "do_not_collapse";

/// GCM delivery priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GcmPriority {
    Normal,
    High,
}

/// One logical notification.
///
/// `text` is both the notification body and the envelope `default` value.
/// Localization keys switch the builders from literal text to key/argument
/// references per platform conventions. `custom` rides along in each
/// platform's data section, re-encoded to whatever that platform accepts.
#[derive(Debug, Clone)]
pub struct Message {
    /// Notification body. Also the envelope `default` entry, always verbatim.
    pub text: Option<String>,
    /// Display title (APNS family only).
    pub title: Option<String>,
    /// Localization key for the body; replaces literal text where set.
    pub localized_key: Option<String>,
    /// Arguments substituted into the localized body.
    pub localized_arguments: Vec<String>,
    /// Localization key for the title; replaces the literal title where set.
    pub title_localized_key: Option<String>,
    /// Arguments substituted into the localized title.
    pub title_localized_arguments: Vec<String>,
    /// Opaque application data carried in every platform's data section.
    pub custom: Map<String, Value>,
    /// Lifetime in seconds; feeds GCM `time_to_live` and ADM `expiresAfter`.
    pub ttl: Option<u64>,
    /// GCM collapse key.
    pub collapse_key: String,
    /// GCM delay-while-idle flag.
    pub delay_while_idle: bool,
    /// GCM delivery priority; `null` on the wire when unset.
    pub priority: Option<GcmPriority>,
    /// Platform sections to compute. Defaults to every supported platform.
    pub platforms: BTreeSet<Platform>,
}

impl Message {
    /// Message with body text and the default platform selection.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Body text as the envelope `default` value; empty when unset.
    pub fn default_text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// True when the message carries neither body text nor custom data.
    /// An empty `text` counts as absent.
    pub(crate) fn is_empty(&self) -> bool {
        self.default_text().is_empty() && self.custom.is_empty()
    }
}

impl Default for Message {
    fn default() -> Self {
        Self {
            text: None,
            title: None,
            localized_key: None,
            localized_arguments: Vec::new(),
            title_localized_key: None,
            title_localized_arguments: Vec::new(),
            custom: Map::new(),
            ttl: None,
            collapse_key: NO_COLLAPSE.to_string(),
            delay_while_idle: false,
            priority: None,
            platforms: Platform::ALL.into_iter().collect(),
        }
    }
}
