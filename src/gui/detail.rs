use eframe::egui::{
    self,
    RichText,
    Ui,
};

use crate::{
    core::{
        Amiibo,
        CatalogSnapshot,
        Region,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        app::View,
        theme::Theme,
    },
};

const MISSING: &str = "N/A";

pub fn detail_view(
    ui: &mut Ui,
    id: &str,
    snapshot: &CatalogSnapshot,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    if ui.button("⬅ Back to Dashboard").clicked() {
        actions.push(UiAction::Navigate(View::Dashboard));
    }
    ui.add_space(8.0);

    // Unknown ids keep waiting; the catalog may not have arrived yet.
    let Some(amiibo) = snapshot.find(id) else {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.label("Loading Amiibo details...");
        });
        return;
    };

    ui.heading(RichText::new("Detail View").color(theme.cyan(ui.ctx())).strong());
    ui.add_space(12.0);

    ui.horizontal_top(|ui| {
        egui::Grid::new("amiibo_detail_grid")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .striped(true)
            .show(ui, |ui| {
                detail_row(ui, theme, "Amiibo ID", id);
                detail_row(ui, theme, "Character", &amiibo.character);
                detail_row(ui, theme, "Amiibo Series", &amiibo.amiibo_series);
                detail_row(ui, theme, "Game Series", &amiibo.game_series);
                detail_row(
                    ui,
                    theme,
                    "Release Date",
                    amiibo.release_date(snapshot.region()).unwrap_or(MISSING),
                );
                detail_row(ui, theme, "Name", &amiibo.name);
                detail_row(ui, theme, "Type", &amiibo.kind);
                detail_row(ui, theme, "Full ID", &amiibo.full_id());
            });

        ui.add_space(32.0);
        regional_releases(ui, theme, amiibo);
    });

    ui.add_space(16.0);
    if !amiibo.image.is_empty() {
        ui.add(
            egui::Image::new(amiibo.image.as_str())
                .max_height(320.0)
                .maintain_aspect_ratio(true),
        );
    }
}

fn detail_row(ui: &mut Ui, theme: &Theme, label: &str, value: &str) {
    ui.label(theme.heading(ui.ctx(), label));
    ui.label(value);
    ui.end_row();
}

fn regional_releases(ui: &mut Ui, theme: &Theme, amiibo: &Amiibo) {
    ui.vertical(|ui| {
        ui.label(RichText::new("Release Dates").color(theme.orange(ui.ctx())).strong());
        egui::Grid::new("amiibo_release_grid").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
            for region in Region::ALL {
                ui.label(region.label());
                ui.label(amiibo.release_date(region).unwrap_or(MISSING));
                ui.end_row();
            }
        });
    });
}
