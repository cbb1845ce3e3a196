use serde::{Deserialize, Serialize};

/// Permission set declared for an embedded page context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedPermissions {
    pub allow_scripts: bool,
    pub allow_same_origin: bool,
    pub allow_forms: bool,
    pub allow_popups: bool,
}

impl Default for EmbedPermissions {
    fn default() -> Self {
        Self {
            allow_scripts: true,
            allow_same_origin: true,
            allow_forms: true,
            allow_popups: true,
        }
    }
}
