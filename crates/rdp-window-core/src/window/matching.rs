use serde::{Deserialize, Serialize};

use crate::config::TargetConfig;

/// Default owner-name token of the remote-desktop client.
pub const DEFAULT_NAME_TOKEN: &str = "Windows";

/// Default canonical display name of the remote-desktop client.
pub const DEFAULT_DISPLAY_NAME: &str = "Windows App";

/// Decides which windows belong to the target application.
///
/// A window is a target when its owner name contains `name_token`
/// (case-sensitive) or equals `display_name` exactly. The substring rule
/// tolerates suffixed build names such as "Windows App (Beta)".
///
/// The substring rule also admits unrelated applications whose name happens
/// to contain the token. That false-positive source is known and left as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetMatcher {
    name_token: String,
    display_name: String,
}

impl TargetMatcher {
    pub fn new(name_token: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name_token: name_token.into(),
            display_name: display_name.into(),
        }
    }

    pub fn from_config(config: &TargetConfig) -> Self {
        Self::new(config.name_token(), config.display_name())
    }

    pub fn name_token(&self) -> &str {
        &self.name_token
    }
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn matches(&self, owner_name: &str) -> bool {
        (!self.name_token.is_empty() && owner_name.contains(&self.name_token))
            || owner_name == self.display_name
    }
}

impl Default for TargetMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_TOKEN, DEFAULT_DISPLAY_NAME)
    }
}
