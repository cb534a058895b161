use eframe::egui::{
    self,
    RichText,
    Ui,
};

use crate::{
    core::CatalogSnapshot,
    gui::theme::Theme,
};

pub fn about_view(ui: &mut Ui, snapshot: &CatalogSnapshot, catalog_url: &str, theme: &Theme) {
    ui.heading(RichText::new("About").color(theme.cyan(ui.ctx())).strong());
    ui.add_space(12.0);

    ui.label(
        "Amiibo Dash summarizes the public amiibo catalog: how many figures exist, which \
         franchises have the most of them, when they were released and how the series compare.",
    );
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label("Catalog data comes from");
        ui.hyperlink_to("AmiiboAPI", "https://www.amiiboapi.com/");
    });
    ui.label(RichText::new(catalog_url).small().color(theme.comment(ui.ctx())));
    ui.add_space(12.0);

    egui::Grid::new("about_grid").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
        ui.label(theme.heading(ui.ctx(), "Records loaded"));
        ui.label(snapshot.records().len().to_string());
        ui.end_row();

        ui.label(theme.heading(ui.ctx(), "Release region"));
        ui.label(snapshot.region().label());
        ui.end_row();

        ui.label(theme.heading(ui.ctx(), "Version"));
        ui.label(env!("CARGO_PKG_VERSION"));
        ui.end_row();
    });
}
