use eframe::egui::{
    self,
    RichText,
};

use crate::gui::{
    actions::{
        ActionQueue,
        UiAction,
    },
    app::View,
    theme::Theme,
};

pub fn sidebar(ctx: &egui::Context, theme: &Theme, current: &View, actions: &mut ActionQueue) {
    egui::SidePanel::left("sidebar").resizable(false).exact_width(170.0).show(ctx, |ui| {
        ui.add_space(12.0);
        ui.heading(RichText::new("Amiibo Dash").color(theme.cyan(ctx)).strong());
        ui.add_space(12.0);
        ui.separator();

        // the detail view belongs to the dashboard
        let on_dashboard = matches!(current, View::Dashboard | View::Detail(_));
        let links = [
            ("Dashboard", View::Dashboard, on_dashboard),
            ("About", View::About, *current == View::About),
        ];

        ui.add_space(6.0);
        for (label, view, selected) in links {
            let response = ui
                .selectable_label(selected, RichText::new(label).size(15.0))
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.clicked() && *current != view {
                actions.push(UiAction::Navigate(view));
            }
        }
    });
}
