//! Which families leave an audit trail on update.

use serde::{Deserialize, Serialize};
use tally_core::policy::AuditPolicy;

const fn yes() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditConfig {
    #[serde(default = "yes")]
    pub copyright: bool,
    #[serde(default)]
    pub ip: bool,
    #[serde(default)]
    pub ecc: bool,
    #[serde(default)]
    pub export_control: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self::from(AuditPolicy::default())
    }
}

impl From<AuditPolicy> for AuditConfig {
    fn from(policy: AuditPolicy) -> Self {
        Self {
            copyright: policy.copyright,
            ip: policy.ip,
            ecc: policy.ecc,
            export_control: policy.export_control,
        }
    }
}

impl AuditConfig {
    pub const fn policy(&self) -> AuditPolicy {
        AuditPolicy {
            copyright: self.copyright,
            ip: self.ip,
            ecc: self.ecc,
            export_control: self.export_control,
        }
    }
}
