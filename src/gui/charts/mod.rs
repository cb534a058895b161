mod distribution;
mod timeline;

use eframe::egui::{
    self,
    RichText,
    Ui,
};
pub use distribution::series_distribution_chart;
use egui_plot::Plot;
pub use timeline::release_timeline_chart;

use crate::gui::theme::Theme;

pub(crate) const CHART_HEIGHT: f32 = 360.0;

pub(crate) fn chart_heading(ui: &mut Ui, theme: &Theme, title: &str) {
    ui.label(RichText::new(title).size(20.0).color(theme.cyan(ui.ctx())).strong());
    ui.add_space(4.0);
}

pub(crate) fn empty_chart(ui: &mut Ui, message: &str) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), CHART_HEIGHT * 0.5),
        egui::Sense::hover(),
    );
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        message,
        egui::FontId::proportional(14.0),
        ui.visuals().weak_text_color(),
    );
}

/// Dashboard charts sit inside a scroll area, so the plots themselves stay fixed.
pub(crate) fn static_plot<'a>(id: &str) -> Plot<'a> {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
}
