use serde::Deserialize;

use pushprism_core::error::{PushPrismError, Result};
use pushprism_core::limits::{ADM_LIMIT_BYTES, APNS_LIMIT_BYTES, GCM_LIMIT_BYTES, PlatformLimits};
use pushprism_core::platform::Platform;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispatchConfig {
    pub version: u32,

    #[serde(default)]
    pub limits: LimitsSection,

    #[serde(default = "default_platforms")]
    pub platforms: Vec<Platform>,
}

impl DispatchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PushPrismError::Config("version must be 1".into()));
        }
        if self.platforms.is_empty() {
            return Err(PushPrismError::Config("platforms must not be empty".into()));
        }

        self.limits.validate()?;

        Ok(())
    }

    /// Ceilings in the plain form the envelope assembler takes.
    pub fn platform_limits(&self) -> PlatformLimits {
        PlatformLimits {
            apns_bytes: self.limits.apns_bytes,
            gcm_bytes: self.limits.gcm_bytes,
            adm_bytes: self.limits.adm_bytes,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsSection {
    #[serde(default = "default_apns_bytes")]
    pub apns_bytes: usize,

    #[serde(default = "default_gcm_bytes")]
    pub gcm_bytes: usize,

    #[serde(default = "default_adm_bytes")]
    pub adm_bytes: usize,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            apns_bytes: default_apns_bytes(),
            gcm_bytes: default_gcm_bytes(),
            adm_bytes: default_adm_bytes(),
        }
    }
}

impl LimitsSection {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("limits.apns_bytes", self.apns_bytes),
            ("limits.gcm_bytes", self.gcm_bytes),
            ("limits.adm_bytes", self.adm_bytes),
        ];
        for (name, value) in fields {
            if !(512..=262_144).contains(&value) {
                return Err(PushPrismError::Config(format!(
                    "{name} must be between 512 and 262144"
                )));
            }
        }
        Ok(())
    }
}

fn default_apns_bytes() -> usize {
    APNS_LIMIT_BYTES
}
fn default_gcm_bytes() -> usize {
    GCM_LIMIT_BYTES
}
fn default_adm_bytes() -> usize {
    ADM_LIMIT_BYTES
}
fn default_platforms() -> Vec<Platform> {
    Platform::ALL.to_vec()
}
