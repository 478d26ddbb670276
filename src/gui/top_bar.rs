use eframe::egui;

use super::app::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    Back,
    OpenSettings,
    ToggleDarkMode,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, view: View, dark_mode: bool) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if view != View::Home {
                    if ui.button("⏴ Back").clicked() {
                        action = Some(TopBarAction::Back);
                    }
                } else {
                    ui.strong("WordSwipe");
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if view != View::Settings
                        && ui.button("⚙").on_hover_text("Settings").clicked()
                    {
                        action = Some(TopBarAction::OpenSettings);
                    }
                    let (icon, hint) = if dark_mode {
                        ("☀", "Switch to light mode")
                    } else {
                        ("🌙", "Switch to dark mode")
                    };
                    if ui.button(icon).on_hover_text(hint).clicked() {
                        action = Some(TopBarAction::ToggleDarkMode);
                    }
                });
            });
        });

        action
    }
}
