use eframe::egui::{
    self,
    CornerRadius,
    Frame,
    Margin,
    RichText,
    Ui,
};

use crate::{
    core::SummaryCounts,
    gui::theme::Theme,
};

pub fn summary_cards(ui: &mut Ui, summary: &SummaryCounts, theme: &Theme) {
    let cards = [
        ("Amiibo Count", summary.total.to_string()),
        ("Origin with Most Amiibos", summary.top_origin.clone()),
        ("Games with Amiibos", summary.game_count.to_string()),
    ];

    ui.columns(cards.len(), |columns| {
        for (ui, (title, value)) in columns.iter_mut().zip(cards) {
            card(ui, theme, title, &value);
        }
    });
}

fn card(ui: &mut Ui, theme: &Theme, title: &str, value: &str) {
    Frame::new()
        .fill(theme.card_fill(ui.ctx()))
        .inner_margin(Margin::symmetric(14, 12))
        .corner_radius(CornerRadius::same(6))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.set_min_height(64.0);
            ui.label(RichText::new(title).color(theme.comment(ui.ctx())).size(13.0));
            ui.add_space(4.0);
            ui.add(
                egui::Label::new(
                    RichText::new(value).size(24.0).strong().color(theme.foreground(ui.ctx())),
                )
                .truncate(),
            );
        });
}
