//! Multi-protocol envelope assembly.
//!
//! The envelope is the single wire object a dispatch service consumes:
//! a `default` fallback string plus one entry per selected platform whose
//! value is that platform's payload JSON **as a string** (double encoding is
//! the wire contract, not an accident). Every builder family renders once
//! and mirrored variants share the copy, so `APNS_SANDBOX` can never drift
//! from `APNS`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{PushPrismError, Result};
use crate::limits::PlatformLimits;
use crate::message::Message;
use crate::platform::{Family, Platform};
use crate::trim;

/// Assembled envelope, ready to serialize.
///
/// Fields serialize in declaration order, which is the canonical key order.
/// Unselected platforms are omitted entirely, never `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub default: String,
    #[serde(rename = "APNS", skip_serializing_if = "Option::is_none")]
    pub apns: Option<String>,
    #[serde(rename = "APNS_VOIP", skip_serializing_if = "Option::is_none")]
    pub apns_voip: Option<String>,
    #[serde(rename = "APNS_SANDBOX", skip_serializing_if = "Option::is_none")]
    pub apns_sandbox: Option<String>,
    #[serde(rename = "APNS_VOIP_SANDBOX", skip_serializing_if = "Option::is_none")]
    pub apns_voip_sandbox: Option<String>,
    #[serde(rename = "GCM", skip_serializing_if = "Option::is_none")]
    pub gcm: Option<String>,
    #[serde(rename = "ADM", skip_serializing_if = "Option::is_none")]
    pub adm: Option<String>,
}

impl Envelope {
    fn empty(default: String) -> Self {
        Self {
            default,
            apns: None,
            apns_voip: None,
            apns_sandbox: None,
            apns_voip_sandbox: None,
            gcm: None,
            adm: None,
        }
    }

    fn slot_mut(&mut self, platform: Platform) -> &mut Option<String> {
        match platform {
            Platform::Apns => &mut self.apns,
            Platform::ApnsVoip => &mut self.apns_voip,
            Platform::ApnsSandbox => &mut self.apns_sandbox,
            Platform::ApnsVoipSandbox => &mut self.apns_voip_sandbox,
            Platform::Gcm => &mut self.gcm,
            Platform::Adm => &mut self.adm,
        }
    }

    /// Payload string for one platform, when it was selected.
    pub fn payload(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Apns => self.apns.as_deref(),
            Platform::ApnsVoip => self.apns_voip.as_deref(),
            Platform::ApnsSandbox => self.apns_sandbox.as_deref(),
            Platform::ApnsVoipSandbox => self.apns_voip_sandbox.as_deref(),
            Platform::Gcm => self.gcm.as_deref(),
            Platform::Adm => self.adm.as_deref(),
        }
    }

    /// Serialize to the envelope wire JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Size-validated payload string for a single platform.
///
/// This is the per-platform escape hatch: callers that would rather drop an
/// oversized platform than abort the whole envelope render each one
/// individually and decide per [`PushPrismError::platform`].
pub fn render_platform(
    msg: &Message,
    platform: Platform,
    limits: &PlatformLimits,
) -> Result<String> {
    trim::render_within(msg, platform, limits.for_family(platform.family()))
}

/// Build the envelope for every platform the message selects.
///
/// Fails eagerly on a contentless message or an empty platform selection,
/// and aborts on the first platform whose payload cannot be brought under
/// its ceiling. A partially filled envelope is never returned.
pub fn assemble_envelope(msg: &Message, limits: &PlatformLimits) -> Result<Envelope> {
    if msg.is_empty() {
        return Err(PushPrismError::EmptyMessage);
    }
    if msg.platforms.is_empty() {
        return Err(PushPrismError::NoPlatforms);
    }

    let mut envelope = Envelope::empty(msg.default_text().to_string());

    // One render per family; mirrored variants share the exact string.
    let mut rendered: BTreeMap<Family, String> = BTreeMap::new();
    for &platform in &msg.platforms {
        let family = platform.family();
        let payload = match rendered.get(&family) {
            Some(hit) => hit.clone(),
            None => {
                let fresh = render_platform(msg, platform, limits)?;
                rendered.insert(family, fresh.clone());
                fresh
            }
        };
        *envelope.slot_mut(platform) = Some(payload);
    }

    Ok(envelope)
}

/// Assemble and serialize in one step.
pub fn assemble(msg: &Message, limits: &PlatformLimits) -> Result<String> {
    assemble_envelope(msg, limits)?.to_json()
}
