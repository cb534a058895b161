use eframe::egui::{
    self,
    containers,
};

use crate::gui::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, theme: &Theme, loading: bool, actions: &mut ActionQueue) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Settings").clicked() {
                        actions.push(UiAction::OpenSettings);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, theme, loading);
                });
            });
        });
    }

    fn show_status_indicator(ui: &mut egui::Ui, theme: &Theme, loading: bool) {
        let (color, tooltip) = if loading {
            (theme.orange(ui.ctx()), "Fetching the amiibo catalog")
        } else {
            (theme.green(ui.ctx()), "Catalog request finished")
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("Catalog").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
