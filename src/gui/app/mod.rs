mod modals;
mod view;

use std::time::Duration;

use eframe::egui;
use modals::Modals;
use tracing::{
    debug,
    error,
    info,
};
pub use view::View;

use super::{
    about::about_view,
    actions::{
        ActionQueue,
        UiAction,
    },
    dashboard::dashboard_view,
    detail::detail_view,
    message_overlay::MessageOverlay,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    sidebar::sidebar,
    table::TableState,
    theme::{
        apply_dark_mode,
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        CatalogSnapshot,
    },
    persistence::save_json,
};

const LOADING_REPAINT: Duration = Duration::from_millis(100);

pub struct DashApp {
    // Catalog
    pub snapshot: CatalogSnapshot,
    loading: bool,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub view: View,
    pub table_state: TableState,
    pub theme: Theme,
    pub message_overlay: MessageOverlay,

    // Modals
    pub modals: Modals,

    task_manager: TaskManager,
}

impl DashApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_data: SettingsData,
        task_manager: TaskManager,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        task_manager.load_catalog(settings_data.catalog_url.clone());

        let mut table_state = TableState::default();
        table_state.set_region(settings_data.release_region);

        let app = Self {
            // Catalog
            snapshot: CatalogSnapshot::default(),
            loading: true,

            // Configuration
            settings_data,

            // UI State
            view: View::default(),
            table_state,
            theme: Theme::dracula(),
            message_overlay: MessageOverlay::new(),

            // Modals
            modals: Modals::default(),

            task_manager,
        };

        app.setup_theme(cc);
        app
    }

    fn setup_theme(&self, cc: &eframe::CreationContext<'_>) {
        set_theme(&cc.egui_ctx, &self.theme);
        apply_dark_mode(&cc.egui_ctx, self.settings_data.dark_mode);
    }
}

impl eframe::App for DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();

        for result in task_results {
            self.handle_task_result(result);
        }

        if self.loading {
            ctx.request_repaint_after(LOADING_REPAINT);
        }

        self.sync_dark_mode(ctx);

        let mut actions = ActionQueue::new();

        TopBar::show(ctx, &self.theme, self.loading, &mut actions);
        sidebar(ctx, &self.theme, &self.view, &mut actions);

        self.table_state.ensure_indices(self.snapshot.records());

        egui::CentralPanel::default().show(ctx, |ui| match &self.view {
            View::Dashboard => {
                egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                    dashboard_view(
                        ui,
                        &self.snapshot,
                        &self.table_state,
                        &self.theme,
                        &mut actions,
                    );
                });
            }
            View::Detail(id) => {
                detail_view(ui, id, &self.snapshot, &self.theme, &mut actions);
            }
            View::About => {
                about_view(ui, &self.snapshot, &self.settings_data.catalog_url, &self.theme);
            }
        });

        self.message_overlay.show(ctx, &self.theme);

        if let Some(settings) = self.modals.settings.show(ctx) {
            self.apply_settings(ctx, settings);
        }

        // Execute all queued actions and repaint if needed
        let had_actions = !actions.is_empty();
        self.execute_actions(&mut actions);

        if had_actions {
            ctx.request_repaint();
        }
    }
}

impl DashApp {
    fn handle_task_result(&mut self, result: TaskResult) {
        debug!(task = result.task_type(), "task result received");

        match result {
            TaskResult::LoadingMessage(message) => {
                self.message_overlay.set_message(message);
            }
            TaskResult::CatalogLoaded(result) => {
                self.loading = false;
                self.message_overlay.clear_message();

                match result {
                    Ok(records) => {
                        let region = self.settings_data.release_region;
                        self.snapshot = CatalogSnapshot::new(records, region);
                        self.table_state.mark_dirty();
                    }
                    // already logged by the task; the empty snapshot stays in place
                    Err(e) => debug!(error = %e, "dashboard left empty"),
                }
            }
        }
    }

    fn execute_actions(&mut self, actions: &mut ActionQueue) {
        for action in actions.drain() {
            match action {
                UiAction::SetSearch(search) => {
                    self.table_state.set_search(search);
                }
                UiAction::SetAmiiboSeries(series) => {
                    self.table_state.set_amiibo_series(series);
                }
                UiAction::SetGameSeries(series) => {
                    self.table_state.set_game_series(series);
                }
                UiAction::ToggleSort(field) => {
                    self.table_state.toggle_sort(field);
                }
                UiAction::ClearSort => {
                    self.table_state.clear_sort();
                }
                UiAction::Navigate(view) => {
                    debug!(?view, "navigate");
                    self.view = view;
                }
                UiAction::OpenDetail(id) => {
                    debug!(id = %id, "open detail view");
                    self.view = View::Detail(id);
                }
                UiAction::OpenSettings => {
                    self.modals.settings.open_settings(self.settings_data.clone());
                }
            }
        }
    }

    fn apply_settings(&mut self, ctx: &egui::Context, settings: SettingsData) {
        if settings.release_region != self.settings_data.release_region {
            info!(region = settings.release_region.key(), "release region changed");
            self.snapshot = self.snapshot.with_region(settings.release_region);
            self.table_state.set_region(settings.release_region);
        }

        if settings.dark_mode != self.settings_data.dark_mode {
            apply_dark_mode(ctx, settings.dark_mode);
        }

        self.settings_data = settings;
        self.save_settings();
    }

    /// Keeps the persisted preference in step with the top bar's theme switch.
    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            error!(error = %e, "failed to save settings");
        }
    }
}
