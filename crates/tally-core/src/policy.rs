//! Which annotation families leave an audit record when their text is corrected.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AnnotationFamily;

/// Per-family `audit_on_update` flags.
///
/// The default audits copyright corrections only. Deletes are never audited.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditPolicy {
    pub copyright: bool,
    pub ip: bool,
    pub ecc: bool,
    pub export_control: bool,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self {
            copyright: true,
            ip: false,
            ecc: false,
            export_control: false,
        }
    }
}

impl AuditPolicy {
    /// Audit every family.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            copyright: true,
            ip: true,
            ecc: true,
            export_control: true,
        }
    }

    #[must_use]
    pub const fn audit_on_update(&self, family: AnnotationFamily) -> bool {
        match family {
            AnnotationFamily::Copyright => self.copyright,
            AnnotationFamily::Ip => self.ip,
            AnnotationFamily::Ecc => self.ecc,
            AnnotationFamily::ExportControl => self.export_control,
        }
    }
}
