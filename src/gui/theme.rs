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

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::amber()
    }
}

impl Theme {
    pub fn amber() -> Self {
        Theme { dark: ThemeDetails::amber_night(), light: ThemeDetails::amber_day() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).foreground).strong()
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).comment)
    }

    pub fn primary(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).primary
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn rose(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).rose
    }

    pub fn blue(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).blue
    }

    pub fn card_fill(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).card
    }

    pub fn card_stroke(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).border
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    primary: Color32,
    green: Color32,
    rose: Color32,
    blue: Color32,
    card: Color32,
    border: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
}

impl ThemeDetails {
    fn amber_night() -> Self {
        Self {
            background: Color32::from_rgb(17, 24, 39),
            foreground: Color32::from_rgb(243, 244, 246),
            selection: Color32::from_rgb(75, 85, 99),
            comment: Color32::from_rgb(156, 163, 175),
            primary: Color32::from_rgb(245, 158, 11),
            green: Color32::from_rgb(34, 197, 94),
            rose: Color32::from_rgb(244, 63, 94),
            blue: Color32::from_rgb(59, 130, 246),
            card: Color32::from_rgb(31, 41, 55),
            border: Color32::from_rgb(55, 65, 81),
            background_darker: Color32::from_rgb(11, 15, 25),
            background_dark: Color32::from_rgb(17, 24, 39),
            background_light: Color32::from_rgb(42, 52, 68),
        }
    }

    fn amber_day() -> Self {
        Self {
            background: Color32::from_rgb(249, 250, 251),
            foreground: Color32::from_rgb(17, 24, 39),
            selection: Color32::from_rgb(253, 230, 138),
            comment: Color32::from_rgb(107, 114, 128),
            primary: Color32::from_rgb(217, 119, 6),
            green: Color32::from_rgb(22, 163, 74),
            rose: Color32::from_rgb(225, 29, 72),
            blue: Color32::from_rgb(37, 99, 235),
            card: Color32::WHITE,
            border: Color32::from_rgb(243, 244, 246),
            background_darker: Color32::from_rgb(229, 231, 235),
            background_dark: Color32::from_rgb(243, 244, 246),
            background_light: Color32::WHITE,
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

pub fn apply_dark_mode(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_theme(if dark_mode { egui::Theme::Dark } else { egui::Theme::Light });
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    bg_stroke: Stroke {
                        color: theme.border,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.background_light,
                    weak_bg_fill: theme.background_light,
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    bg_stroke: Stroke { color: theme.primary, ..default.widgets.hovered.bg_stroke },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    bg_stroke: Stroke { color: theme.primary, ..default.widgets.active.bg_stroke },
                    ..default.widgets.active
                },
                ..default.widgets
            },
            selection: Selection {
                bg_fill: theme.primary,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.blue,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_dark,
            },
            extreme_bg_color: theme.background_darker,
            error_fg_color: theme.rose,
            warn_fg_color: theme.primary,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.card,
            window_stroke: Stroke { color: theme.border, ..default.window_stroke },
            panel_fill: theme.background,
            ..default
        },
    );
}
