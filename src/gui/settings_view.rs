use eframe::egui::{
    self,
    RichText,
};

use super::{
    app::VocabApp,
    theme::Theme,
};
use crate::core::{
    FontSize,
    Settings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    ToggleAutoPronounce,
    ToggleRandomOrder,
    ToggleDarkMode,
    SetFontSize(FontSize),
    ExportWords,
    ImportWords,
    ResetProgress,
}

fn section(ui: &mut egui::Ui, theme: &Theme, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    let ctx = ui.ctx().clone();
    egui::Frame::group(ui.style()).corner_radius(16.0).inner_margin(16.0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(theme.muted(&ctx, &title.to_uppercase()).small().strong());
        ui.separator();
        add_contents(ui);
    });
    ui.add_space(16.0);
}

fn toggle_row(ui: &mut egui::Ui, icon: &str, label: &str, value: bool) -> bool {
    let mut toggled = false;
    egui::Sides::new().show(
        ui,
        |ui| {
            ui.label(format!("{}  {}", icon, label));
        },
        |ui| {
            let mut current = value;
            if ui.checkbox(&mut current, "").changed() {
                toggled = true;
            }
        },
    );
    toggled
}

fn preferences(ui: &mut egui::Ui, settings: &Settings) -> Option<SettingsAction> {
    let mut action = None;
    if toggle_row(ui, "🔊", "Auto-Pronunciation", settings.auto_pronounce) {
        action = Some(SettingsAction::ToggleAutoPronounce);
    }
    if toggle_row(ui, "🔀", "Random Order", settings.random_order) {
        action = Some(SettingsAction::ToggleRandomOrder);
    }
    action
}

fn appearance(ui: &mut egui::Ui, settings: &Settings) -> Option<SettingsAction> {
    let mut action = None;
    if toggle_row(ui, "🌙", "Dark Mode", settings.dark_mode) {
        action = Some(SettingsAction::ToggleDarkMode);
    }

    ui.add_space(8.0);
    ui.label("🗛  Card Font Size");
    ui.horizontal(|ui| {
        for size in FontSize::ALL {
            if ui.selectable_label(settings.font_size == size, size.label()).clicked()
                && settings.font_size != size
            {
                action = Some(SettingsAction::SetFontSize(size));
            }
        }
    });
    action
}

fn data(ui: &mut egui::Ui) -> Option<SettingsAction> {
    let mut action = None;
    if ui.add(egui::Button::new("⬇  Export Word List").frame(false)).clicked() {
        action = Some(SettingsAction::ExportWords);
    }
    if ui.add(egui::Button::new("⬆  Import Words").frame(false)).clicked() {
        action = Some(SettingsAction::ImportWords);
    }
    let reset = RichText::new("🗑  Reset Progress").color(ui.visuals().error_fg_color).strong();
    if ui.add(egui::Button::new(reset).frame(false)).clicked() {
        action = Some(SettingsAction::ResetProgress);
    }
    action
}

pub fn settings_panel(ctx: &egui::Context, app: &mut VocabApp) {
    let mut action = None;
    let settings = app.settings.get().clone();

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.add_space(8.0);
            ui.label(app.theme.heading(ctx, "Settings").size(24.0));
            ui.add_space(12.0);

            section(ui, &app.theme, "Preferences", |ui| {
                if let Some(a) = preferences(ui, &settings) {
                    action = Some(a);
                }
            });
            section(ui, &app.theme, "Appearance", |ui| {
                if let Some(a) = appearance(ui, &settings) {
                    action = Some(a);
                }
            });
            section(ui, &app.theme, "Data", |ui| {
                if let Some(a) = data(ui) {
                    action = Some(a);
                }
            });
        });
    });

    if let Some(action) = action {
        app.apply_settings_action(ctx, action);
    }
}
