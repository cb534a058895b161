use eframe::egui::Ui;

use crate::{
    core::CatalogSnapshot,
    gui::{
        actions::ActionQueue,
        charts::{
            release_timeline_chart,
            series_distribution_chart,
        },
        summary::summary_cards,
        table::{
            amiibo_table,
            TableState,
        },
        theme::Theme,
    },
};

pub fn dashboard_view(
    ui: &mut Ui,
    snapshot: &CatalogSnapshot,
    table_state: &TableState,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    summary_cards(ui, snapshot.summary(), theme);
    ui.add_space(16.0);

    release_timeline_chart(ui, snapshot, theme);
    ui.add_space(16.0);
    ui.separator();

    series_distribution_chart(ui, snapshot, theme);
    ui.add_space(16.0);
    ui.separator();

    amiibo_table(ui, snapshot, table_state, theme, actions);
}
