//! Delivery-transport seam.
//!
//! The engine never talks to a push service itself: it assembles the
//! envelope and hands the finished string to an injected transport. Real
//! implementations (an SNS client, an HTTP bridge) live with the hosting
//! service; this crate only ships an in-memory double for tests, examples,
//! and dry runs.

use std::sync::Mutex;

use async_trait::async_trait;

use pushprism_core::error::Result;

/// Consumer of fully assembled, size-validated envelope strings.
#[async_trait]
pub trait EnvelopeTransport: Send + Sync {
    /// Transport name used in logs.
    fn name(&self) -> &'static str;

    /// Hand one envelope to the dispatch service. `target` is the device
    /// endpoint or topic identifier, opaque to this crate.
    async fn publish(&self, target: &str, envelope: &str) -> Result<()>;
}

/// In-memory transport that records every publish instead of sending.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything published so far, as (target, envelope) pairs.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl EnvelopeTransport for RecordingTransport {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn publish(&self, target: &str, envelope: &str) -> Result<()> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((target.to_string(), envelope.to_string()));
        }
        Ok(())
    }
}
