use crate::gui::settings::SettingsModal;

pub struct Modals {
    pub settings: SettingsModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self { settings: SettingsModal::new() }
    }
}
