//! Per-family payload byte ceilings.

use crate::platform::Family;

/// Default APNS family ceiling in bytes.
pub const APNS_LIMIT_BYTES: usize = 2048;
/// Default GCM ceiling in bytes.
pub const GCM_LIMIT_BYTES: usize = 4096;
/// Default ADM ceiling in bytes.
pub const ADM_LIMIT_BYTES: usize = 6144;

/// Maximum serialized payload size per builder family.
///
/// The ceilings are dispatch-service constraints, not platform gospel, so
/// they stay plain tunable values; configuration loads them and the envelope
/// assembler enforces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformLimits {
    pub apns_bytes: usize,
    pub gcm_bytes: usize,
    pub adm_bytes: usize,
}

impl Default for PlatformLimits {
    fn default() -> Self {
        Self {
            apns_bytes: APNS_LIMIT_BYTES,
            gcm_bytes: GCM_LIMIT_BYTES,
            adm_bytes: ADM_LIMIT_BYTES,
        }
    }
}

impl PlatformLimits {
    /// Ceiling for one builder family.
    pub fn for_family(&self, family: Family) -> usize {
        match family {
            Family::Apns => self.apns_bytes,
            Family::Gcm => self.gcm_bytes,
            Family::Adm => self.adm_bytes,
        }
    }
}
