//! Target platforms and the builder families behind them.
//!
//! The platform set is closed: envelope keys are part of the wire contract,
//! so new targets are added here, never invented by callers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dispatch targets understood by the envelope format.
///
/// Variants order matches the canonical envelope key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "APNS")]
    Apns,
    #[serde(rename = "APNS_VOIP")]
    ApnsVoip,
    #[serde(rename = "APNS_SANDBOX")]
    ApnsSandbox,
    #[serde(rename = "APNS_VOIP_SANDBOX")]
    ApnsVoipSandbox,
    #[serde(rename = "GCM")]
    Gcm,
    #[serde(rename = "ADM")]
    Adm,
}

/// Payload families. One builder per family; platforms in the same family
/// share its output byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    Apns,
    Gcm,
    Adm,
}

impl Platform {
    /// Every supported platform, in envelope key order.
    pub const ALL: [Platform; 6] = [
        Platform::Apns,
        Platform::ApnsVoip,
        Platform::ApnsSandbox,
        Platform::ApnsVoipSandbox,
        Platform::Gcm,
        Platform::Adm,
    ];

    /// Envelope key for this platform (stable API).
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Apns => "APNS",
            Platform::ApnsVoip => "APNS_VOIP",
            Platform::ApnsSandbox => "APNS_SANDBOX",
            Platform::ApnsVoipSandbox => "APNS_VOIP_SANDBOX",
            Platform::Gcm => "GCM",
            Platform::Adm => "ADM",
        }
    }

    /// Builder family this platform renders with.
    pub fn family(self) -> Family {
        match self {
            Platform::Apns
            | Platform::ApnsVoip
            | Platform::ApnsSandbox
            | Platform::ApnsVoipSandbox => Family::Apns,
            Platform::Gcm => Family::Gcm,
            Platform::Adm => Family::Adm,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
