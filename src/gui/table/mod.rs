use eframe::egui::{
    self,
    RichText,
    Sense,
    Ui,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::core::{
    Amiibo,
    CatalogSnapshot,
};

mod header;
pub mod sort;
mod state;

use header::{
    controls_row,
    header_cols,
};
pub use sort::{
    SortDirection,
    SortField,
};
pub use state::TableState;

const ROW_HEIGHT: f32 = 64.0;
const MISSING_DATE: &str = "N/A";

/// Expects `state.ensure_indices` to have run against `snapshot` this frame.
pub fn amiibo_table(
    ui: &mut Ui,
    snapshot: &CatalogSnapshot,
    state: &TableState,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    controls_row(ui, state, snapshot.options(), actions);
    ui.add_space(8.0);

    let records = snapshot.records();
    let visible = state.visible_indices();

    if visible.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                RichText::new("No amiibo match the current filters")
                    .color(theme.comment(ui.ctx())),
            );
        });
        return;
    }

    let region = snapshot.region();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .vscroll(false)
        .sense(Sense::click())
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(140.0))
        .column(Column::remainder().at_least(140.0))
        .column(Column::remainder().at_least(140.0))
        .column(Column::exact(110.0))
        .column(Column::exact(ROW_HEIGHT + 16.0))
        .header(25.0, |header| {
            header_cols(header, state, theme, actions);
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, visible.len(), |mut row| {
                let amiibo = &records[visible[row.index()]];

                row.col(|ui| {
                    ui.label(RichText::new(&amiibo.character).strong());
                });
                row.col(|ui| {
                    ui.label(amiibo.amiibo_series.as_str());
                });
                row.col(|ui| {
                    ui.label(amiibo.game_series.as_str());
                });
                row.col(|ui| {
                    ui.label(amiibo.release_date(region).unwrap_or(MISSING_DATE));
                });
                row.col(|ui| {
                    amiibo_thumbnail(ui, amiibo, ROW_HEIGHT - 8.0);
                });

                if row.response().on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                    actions.push(UiAction::OpenDetail(amiibo.id().to_string()));
                }
            });
        });
}

pub(crate) fn amiibo_thumbnail(ui: &mut Ui, amiibo: &Amiibo, max_height: f32) {
    if amiibo.image.is_empty() {
        ui.label(RichText::new("No image").weak());
        return;
    }
    ui.add(
        egui::Image::new(amiibo.image.as_str())
            .max_height(max_height)
            .maintain_aspect_ratio(true),
    );
}
