use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    http::DEFAULT_CATALOG_URL,
    Region,
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub catalog_url: String,
    pub release_region: Region,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            release_region: Region::Na,
            dark_mode: true,
        }
    }
}
