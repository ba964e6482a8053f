//! Soundboard configuration

/// Default URL prefix under which manifest clips are served
pub const DEFAULT_ASSET_BASE: &str = "audio/";

/// Default key the saved clip order is stored under
pub const DEFAULT_STORAGE_KEY: &str = "soundboard-order";

/// Whether reordering needs a signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReorderPolicy {
    /// Anyone may reorder; order is persisted locally
    #[default]
    Open,

    /// Reordering is a write operation and is refused without a session
    RequireSignIn,
}

/// Configuration for a soundboard instance
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Prefix prepended to percent-encoded file names to build clip URLs
    pub asset_base: String,

    /// Key the saved order lives under in the order store
    pub storage_key: String,

    pub reorder_policy: ReorderPolicy,
}

impl BoardConfig {
    /// Create a configuration serving clips from `asset_base`
    pub fn new(asset_base: impl Into<String>) -> Self {
        Self {
            asset_base: asset_base.into(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            reorder_policy: ReorderPolicy::default(),
        }
    }

    /// Set the saved-order storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the reorder gating policy
    pub fn with_reorder_policy(mut self, policy: ReorderPolicy) -> Self {
        self.reorder_policy = policy;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}
