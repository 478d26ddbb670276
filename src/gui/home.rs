use eframe::egui::{
    self,
    RichText,
};

use super::{
    app::VocabApp,
    theme::Theme,
    word_table::{
        word_table,
        WordTableAction,
    },
};
use crate::core::{
    streak,
    FilterMode,
    Stats,
};

pub enum HomeAction {
    StartSession(FilterMode),
    Table(WordTableAction),
}

fn mode_card(
    ui: &mut egui::Ui,
    theme: &Theme,
    mode: FilterMode,
    stats: &Stats,
) -> egui::Response {
    let ctx = ui.ctx().clone();
    let (icon, title, subtitle, color) = match mode {
        FilterMode::All => ("▶", "Start Now", "All words".to_string(), theme.primary(&ctx)),
        FilterMode::Unlearned => (
            "📈",
            "New Words",
            format!("{} remaining", stats.count_for(mode)),
            theme.blue(&ctx),
        ),
        FilterMode::Favorites => {
            ("♥", "Favorites", format!("{} words", stats.count_for(mode)), theme.rose(&ctx))
        }
    };

    let text = RichText::new(format!("{}  {}\n{}", icon, title, subtitle)).size(15.0);
    let button = egui::Button::new(text)
        .min_size(egui::vec2(ui.available_width(), 64.0))
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(16.0);
    ui.add(button)
}

pub fn home_panel(ctx: &egui::Context, app: &mut VocabApp) {
    let mut action = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.add_space(12.0);
            ui.label(app.theme.heading(ctx, "I'm Learning Words").size(26.0));
            ui.label(app.theme.muted(ctx, "Simple and smooth vocabulary experience."));
            ui.add_space(16.0);

            let stats = Stats::from_words(app.words.get_all());
            let streak_days = app.streak.streak().current(streak::today());

            egui::Frame::group(ui.style()).corner_radius(20.0).inner_margin(16.0).show(ui, |ui| {
                ui.set_width(ui.available_width());
                egui::Sides::new().show(
                    ui,
                    |ui| {
                        ui.vertical(|ui| {
                            ui.label(app.theme.muted(ctx, "Total Progress"));
                            ui.label(
                                RichText::new(format!("{} / {}", stats.learned, stats.total))
                                    .size(28.0)
                                    .strong(),
                            );
                            ui.label(
                                app.theme.muted(ctx, &format!("🔥 {} day streak", streak_days)),
                            );
                        });
                    },
                    |ui| {
                        ui.label(
                            RichText::new(format!("{}%", stats.percentage()))
                                .size(22.0)
                                .strong()
                                .color(app.theme.primary(ctx)),
                        );
                    },
                );
                ui.add(
                    egui::ProgressBar::new(stats.percentage() as f32 / 100.0)
                        .desired_height(6.0)
                        .fill(app.theme.primary(ctx)),
                );
            });

            ui.add_space(20.0);
            ui.label(app.theme.heading(ctx, "Start Learning").size(18.0));
            ui.add_space(8.0);

            for mode in FilterMode::ALL {
                if mode_card(ui, &app.theme, mode, &stats).clicked() {
                    action = Some(HomeAction::StartSession(mode));
                }
                ui.add_space(6.0);
            }

            ui.add_space(16.0);
            egui::CollapsingHeader::new(app.theme.heading(ctx, "Word List").size(18.0))
                .default_open(false)
                .show(ui, |ui| {
                    if let Some(table_action) = word_table(ui, app.words.get_all(), &app.theme) {
                        action = Some(HomeAction::Table(table_action));
                    }
                });
        });
    });

    match action {
        Some(HomeAction::StartSession(mode)) => app.start_session(mode),
        Some(HomeAction::Table(table_action)) => app.apply_table_action(table_action),
        None => {}
    }
}
