use eframe::egui;

use super::data::SettingsData;
use crate::core::Region;

pub struct SettingsModal {
    open: bool,
    temp_settings: SettingsData,
    original_settings: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            temp_settings: SettingsData::default(),
            original_settings: SettingsData::default(),
        }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.temp_settings = current_settings.clone();
        self.original_settings = current_settings;
        self.open = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.temp_settings != self.original_settings
    }

    /// Returns the edited settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(380.0);
            ui.heading("Settings");
            ui.add_space(10.0);

            egui::Grid::new("settings_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("Release region");
                egui::ComboBox::from_id_salt("release_region")
                    .selected_text(self.temp_settings.release_region.label())
                    .show_ui(ui, |ui| {
                        for region in Region::ALL {
                            ui.selectable_value(
                                &mut self.temp_settings.release_region,
                                region,
                                region.label(),
                            );
                        }
                    });
                ui.end_row();

                ui.label("Dark mode");
                ui.checkbox(&mut self.temp_settings.dark_mode, "");
                ui.end_row();

                ui.label("Catalog URL");
                ui.label(
                    egui::RichText::new(&self.temp_settings.catalog_url)
                        .small()
                        .color(ui.visuals().weak_text_color()),
                );
                ui.end_row();
            });

            ui.add_space(10.0);
            ui.separator();

            let is_dirty = self.is_dirty();
            ui.horizontal(|ui| {
                if ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked() {
                    result = Some(self.temp_settings.clone());
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
