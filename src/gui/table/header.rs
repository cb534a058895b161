use eframe::egui::{
    self,
    Frame,
    Margin,
    RichText,
    Sense,
    TextEdit,
    TextStyle,
    Ui,
};
use egui_extras::TableRow;

use super::{
    sort::{
        SortDirection,
        SortField,
        SortState,
    },
    TableState,
};
use crate::{
    core::FilterOptions,
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

const ALL_AMIIBO_SERIES: &str = "All Amiibo Series";
const ALL_GAME_SERIES: &str = "All Game Series";

pub fn header_cols(
    mut header: TableRow<'_, '_>,
    state: &TableState,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    let sortable = [
        SortField::Character,
        SortField::AmiiboSeries,
        SortField::GameSeries,
        SortField::ReleaseDate,
    ];
    for field in sortable {
        header.col(|ui| column_header(ui, state.sort_state(), theme, field, actions));
    }
    header.col(|ui| {
        ui.label(theme.heading(ui.ctx(), "Image"));
    });
}

pub fn controls_row(
    ui: &mut Ui,
    state: &TableState,
    options: &FilterOptions,
    actions: &mut ActionQueue,
) {
    let filter = state.filter();
    let mut search = filter.search.clone();
    let mut amiibo_series = filter.amiibo_series.clone();
    let mut game_series = filter.game_series.clone();

    Frame::group(ui.style()).inner_margin(Margin::symmetric(8, 4)).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 12.0;

            let response = ui.add_sized(
                [260.0, ui.spacing().interact_size.y],
                TextEdit::singleline(&mut search).hint_text("Search..."),
            );
            if response.changed() {
                actions.push(UiAction::SetSearch(search));
            }

            let amiibo_changed = series_combo(
                ui,
                "amiibo_series",
                ALL_AMIIBO_SERIES,
                &options.amiibo_series,
                &mut amiibo_series,
            );
            if amiibo_changed {
                actions.push(UiAction::SetAmiiboSeries(amiibo_series));
            }

            let game_changed = series_combo(
                ui,
                "game_series",
                ALL_GAME_SERIES,
                &options.game_series,
                &mut game_series,
            );
            if game_changed {
                actions.push(UiAction::SetGameSeries(game_series));
            }

            if state.sort_state().field.is_some() && ui.small_button("Clear sort").clicked() {
                actions.push(UiAction::ClearSort);
            }
        });
    });
}

/// Empty selection stands for "all". Returns true when the selection changed.
fn series_combo(
    ui: &mut Ui,
    id: &str,
    all_label: &str,
    options: &[String],
    selected: &mut String,
) -> bool {
    let before = selected.clone();
    let selected_text = if selected.is_empty() { all_label } else { selected.as_str() };

    egui::ComboBox::from_id_salt(id)
        .width(220.0)
        .selected_text(selected_text.to_string())
        .show_ui(ui, |ui| {
            ui.selectable_value(selected, String::new(), all_label);
            for option in options {
                ui.selectable_value(selected, option.clone(), option);
            }
        });

    *selected != before
}

fn column_header(
    ui: &mut Ui,
    sort_state: SortState,
    theme: &Theme,
    field: SortField,
    actions: &mut ActionQueue,
) {
    let title = field.title();
    let is_active = sort_state.field == Some(field);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;

        let label = theme.heading(ui.ctx(), title);
        let mut response = ui
            .add(egui::Label::new(label).sense(Sense::click()))
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        response = response.on_hover_ui(|ui| {
            if is_active {
                let direction_text = match sort_state.direction {
                    SortDirection::Ascending => "ascending",
                    SortDirection::Descending => "descending",
                };
                ui.horizontal(|ui| {
                    ui.label("Sorted by");
                    ui.label(RichText::new(title).color(ui.visuals().hyperlink_color).strong());
                    ui.label("in");
                    ui.label(RichText::new(direction_text).color(ui.visuals().warn_fg_color));
                    ui.label("order");
                });
            } else {
                ui.label(format!("Sort by {}", title));
            }
        });

        let mut clicked = response.clicked();

        if let Some(arrow) = sort_arrow_text(ui, sort_state, field, response.hovered()) {
            let arrow_response = ui
                .add(egui::Label::new(arrow).sense(Sense::click()))
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            clicked |= arrow_response.clicked();
        }

        if clicked {
            actions.push(UiAction::ToggleSort(field));
        }
    });
}

fn sort_arrow_text(
    ui: &Ui,
    sort_state: SortState,
    field: SortField,
    hovered: bool,
) -> Option<RichText> {
    let is_active = sort_state.field == Some(field);
    if !is_active && !hovered {
        return None;
    }

    let direction =
        if is_active { sort_state.direction } else { SortState::default_direction(field) };
    let arrow = match direction {
        SortDirection::Ascending => "⬆",
        SortDirection::Descending => "⬇",
    };
    let color =
        if is_active { ui.visuals().strong_text_color() } else { ui.visuals().weak_text_color() };

    Some(RichText::new(arrow).color(color).text_style(TextStyle::Small))
}
