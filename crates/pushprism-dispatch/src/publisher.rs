//! Envelope assembly and transport hand-off.

use std::sync::Arc;

use pushprism_core::envelope;
use pushprism_core::error::Result;
use pushprism_core::limits::PlatformLimits;
use pushprism_core::message::Message;
use pushprism_core::platform::Platform;

use crate::config::DispatchConfig;
use crate::transport::EnvelopeTransport;

/// Assembles envelopes per the configured profile and hands them to the
/// injected transport. Holds plain values copied out of config, no live
/// config handle.
pub struct Publisher {
    limits: PlatformLimits,
    platforms: Vec<Platform>,
    transport: Arc<dyn EnvelopeTransport>,
}

impl Publisher {
    pub fn new(cfg: &DispatchConfig, transport: Arc<dyn EnvelopeTransport>) -> Self {
        Self {
            limits: cfg.platform_limits(),
            platforms: cfg.platforms.clone(),
            transport,
        }
    }

    /// Fresh message seeded with the configured platform selection.
    pub fn message(&self, text: impl Into<String>) -> Message {
        let mut msg = Message::new(text);
        msg.platforms = self.platforms.iter().copied().collect();
        msg
    }

    /// Byte ceilings in effect.
    pub fn limits(&self) -> &PlatformLimits {
        &self.limits
    }

    /// Assemble the envelope for `msg` and hand it to the transport.
    ///
    /// Assembly failure propagates before the transport is touched, so a
    /// partial or oversized envelope is never sent.
    pub async fn publish(&self, msg: &Message, target: &str) -> Result<()> {
        // Entered span is scoped to the synchronous assembly and dropped
        // before the await point.
        let envelope = {
            let _span = tracing::debug_span!(
                "publish",
                endpoint = target,
                platforms = msg.platforms.len()
            )
            .entered();
            envelope::assemble(msg, &self.limits)?
        };
        tracing::debug!(endpoint = target, bytes = envelope.len(), "envelope assembled");

        self.transport.publish(target, &envelope).await?;
        tracing::info!(
            endpoint = target,
            transport = self.transport.name(),
            "envelope handed off"
        );
        Ok(())
    }
}
