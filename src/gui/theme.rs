use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

/// Series colors shared by the timeline and the distribution chart.
pub const CHART_PALETTE: [Color32; 10] = [
    Color32::from_rgb(0x88, 0x84, 0xd8),
    Color32::from_rgb(0x82, 0xca, 0x9d),
    Color32::from_rgb(0xff, 0xc6, 0x58),
    Color32::from_rgb(0xff, 0x80, 0x42),
    Color32::from_rgb(0x00, 0x88, 0xfe),
    Color32::from_rgb(0x00, 0xc4, 0x9f),
    Color32::from_rgb(0xff, 0xbb, 0x28),
    Color32::from_rgb(0xff, 0x80, 0x42),
    Color32::from_rgb(0x88, 0x84, 0xd8),
    Color32::from_rgb(0x82, 0xca, 0x9d),
];

pub fn chart_color(index: usize) -> Color32 {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: ThemeDetails::dracula(), light: ThemeDetails::dracula_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.purple(ctx))
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).orange
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn purple(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).purple
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).cyan
    }

    pub fn pink(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).pink
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }

    pub fn foreground(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).foreground
    }

    pub fn card_fill(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_light
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
    pink: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            pink: Color32::from_rgb(255, 121, 198),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
            background_lighter: Color32::from_rgb(66, 69, 80),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            foreground: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            comment: Color32::from_rgb(120, 130, 160),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(220, 150, 90),
            green: Color32::from_rgb(80, 200, 120),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(80, 190, 230),
            pink: Color32::from_rgb(230, 130, 200),
            background_darker: Color32::from_rgb(235, 235, 230),
            background_dark: Color32::from_rgb(245, 245, 240),
            background_light: Color32::from_rgb(255, 255, 250),
            background_lighter: Color32::from_rgb(255, 255, 255),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

/// Switches between the registered dark and light variants.
pub fn apply_dark_mode(ctx: &egui::Context, dark_mode: bool) {
    let (theme, preference) = if dark_mode {
        (egui::Theme::Dark, egui::ThemePreference::Dark)
    } else {
        (egui::Theme::Light, egui::ThemePreference::Light)
    };
    ctx.set_theme(theme);
    ctx.options_mut(|o| o.theme_preference = preference);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let widget = |base: WidgetVisuals, bg_fill: Color32, weak: Color32, stroke: Color32| {
        WidgetVisuals {
            bg_fill,
            weak_bg_fill: weak,
            bg_stroke: Stroke { color: stroke, ..base.bg_stroke },
            fg_stroke: Stroke { color: theme.foreground, ..base.fg_stroke },
            ..base
        }
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    default.widgets.noninteractive,
                    theme.background,
                    theme.background_lighter,
                    theme.background_dark,
                ),
                inactive: widget(
                    default.widgets.inactive,
                    theme.background_light,
                    theme.background_lighter,
                    theme.background_dark,
                ),
                hovered: widget(
                    default.widgets.hovered,
                    theme.selection,
                    theme.background_lighter,
                    theme.cyan,
                ),
                active: widget(
                    default.widgets.active,
                    theme.selection,
                    theme.background_light,
                    theme.cyan,
                ),
                open: widget(
                    default.widgets.open,
                    theme.background_dark,
                    theme.background_lighter,
                    theme.purple,
                ),
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.cyan,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_light,
            },
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background_dark,
            popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}
