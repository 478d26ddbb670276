use eframe::egui::{
    self,
    Key,
    RichText,
};

use super::{
    app::VocabApp,
    card::{
        word_card,
        CardAction,
    },
};
use crate::core::{
    DeckCommand,
    FilterMode,
    Word,
};

struct SessionSnapshot {
    mode: FilterMode,
    progress: Option<(usize, usize)>,
    at_start: bool,
    at_end: bool,
    current: Option<Word>,
}

enum SessionAction {
    GoHome,
    Command(DeckCommand),
    Pronounce,
}

fn keyboard_command(ctx: &egui::Context) -> Option<DeckCommand> {
    ctx.input(|i| {
        if i.key_pressed(Key::ArrowRight) {
            Some(DeckCommand::Advance)
        } else if i.key_pressed(Key::ArrowLeft) {
            Some(DeckCommand::Retreat)
        } else if i.key_pressed(Key::Space) {
            Some(DeckCommand::ToggleFavorite)
        } else {
            None
        }
    })
}

fn empty_state(ui: &mut egui::Ui, app: &VocabApp, mode: FilterMode) -> bool {
    let ctx = ui.ctx().clone();
    let mut go_home = false;
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.label(RichText::new("⟲").size(48.0).color(ui.visuals().weak_text_color()));
        ui.add_space(12.0);
        ui.label(app.theme.heading(&ctx, "No words found").size(20.0));
        ui.label(app.theme.muted(&ctx, mode.empty_message()));
        ui.add_space(24.0);
        go_home = ui
            .add(
                egui::Button::new(RichText::new("Go Back Home").strong())
                    .fill(app.theme.primary(&ctx))
                    .corner_radius(12.0),
            )
            .clicked();
    });
    go_home
}

pub fn session_panel(ctx: &egui::Context, app: &mut VocabApp) {
    let snapshot = app.session.as_ref().map(|session| SessionSnapshot {
        mode: session.mode(),
        progress: session.progress(),
        at_start: session.cursor().is_at_start(),
        at_end: session.cursor().is_at_end(),
        current: session.current(app.words.get_all()).cloned(),
    });
    let Some(SessionSnapshot { mode, progress, at_start, at_end, current }) = snapshot else {
        app.go_home();
        return;
    };

    let mut action = None;
    if !app.modal_open() {
        action = keyboard_command(ctx).map(SessionAction::Command);
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(word) = current.as_ref() else {
            if empty_state(ui, app, mode) {
                action = Some(SessionAction::GoHome);
            }
            return;
        };

        if let Some((position, total)) = progress {
            ui.vertical_centered(|ui| {
                ui.label(app.theme.heading(ctx, &format!("{} / {}", position, total)));
            });
            ui.add(
                egui::ProgressBar::new(position as f32 / total as f32)
                    .desired_height(6.0)
                    .fill(app.theme.primary(ctx)),
            );
        }
        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            let font_size = app.settings.get().font_size;
            match word_card(ui, word, font_size, &mut app.gesture, &app.theme) {
                Some(CardAction::Swipe(swipe)) => {
                    action = Some(SessionAction::Command(DeckCommand::Swipe(swipe)));
                }
                Some(CardAction::ToggleFavorite) => {
                    action = Some(SessionAction::Command(DeckCommand::ToggleFavorite));
                }
                Some(CardAction::ToggleLearned) => {
                    action = Some(SessionAction::Command(DeckCommand::ToggleLearned));
                }
                Some(CardAction::Pronounce) => action = Some(SessionAction::Pronounce),
                None => {}
            }

            ui.add_space(20.0);
            ui.horizontal(|ui| {
                let button_width = 56.0;
                let spacing = 32.0;
                ui.add_space((ui.available_width() - button_width * 2.0 - spacing).max(0.0) / 2.0);

                let prev = egui::Button::new(RichText::new("⏴").size(22.0))
                    .min_size(egui::vec2(button_width, button_width))
                    .corner_radius(28.0);
                if ui.add_enabled(!at_start, prev).clicked() {
                    action = Some(SessionAction::Command(DeckCommand::Retreat));
                }

                ui.add_space(spacing);

                let next = egui::Button::new(RichText::new("⏵").size(22.0))
                    .min_size(egui::vec2(button_width, button_width))
                    .fill(app.theme.primary(ctx))
                    .corner_radius(28.0);
                if ui.add_enabled(!at_end, next).clicked() {
                    action = Some(SessionAction::Command(DeckCommand::Advance));
                }
            });
        });
    });

    match action {
        Some(SessionAction::GoHome) => app.go_home(),
        Some(SessionAction::Command(command)) => app.run_command(command),
        Some(SessionAction::Pronounce) => app.pronounce_current(),
        None => {}
    }
    app.announce_card();
}
