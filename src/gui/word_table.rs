use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::{
        Word,
        WordId,
    },
    gui::theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordTableAction {
    ToggleLearned(WordId),
    ToggleFavorite(WordId),
}

pub fn word_table(ui: &mut egui::Ui, words: &[Word], theme: &Theme) -> Option<WordTableAction> {
    let ctx = ui.ctx().clone();
    let row_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);
    let mut action = None;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder().at_least(80.0).clip(true))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(30.0))
        .column(Column::auto().at_least(30.0))
        .max_scroll_height(320.0)
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.label(theme.heading(&ctx, "Word"));
            });
            header.col(|ui| {
                ui.label(theme.heading(&ctx, "Meaning"));
            });
            header.col(|ui| {
                ui.label(theme.heading(&ctx, "Level"));
            });
            header.col(|ui| {
                ui.label(theme.heading(&ctx, "✔")).on_hover_text("Learned");
            });
            header.col(|ui| {
                ui.label(theme.heading(&ctx, "★")).on_hover_text("Favorite");
            });
        })
        .body(|body| {
            body.rows(row_height, words.len(), |mut row| {
                let word = &words[row.index()];
                row.col(|ui| {
                    ui.strong(&word.en);
                });
                row.col(|ui| {
                    ui.label(&word.cn).on_hover_text(word.example.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    if let Some(stars) = word.difficulty_stars() {
                        ui.label(egui::RichText::new(stars).small().color(theme.primary(&ctx)));
                    }
                });
                row.col(|ui| {
                    let mut learned = word.learned;
                    if ui.checkbox(&mut learned, "").changed() {
                        action = Some(WordTableAction::ToggleLearned(word.id));
                    }
                });
                row.col(|ui| {
                    let (star, color) = if word.is_favorite {
                        ("★", theme.primary(&ctx))
                    } else {
                        ("☆", ui.visuals().weak_text_color())
                    };
                    if ui
                        .add(egui::Button::new(egui::RichText::new(star).color(color)).frame(false))
                        .clicked()
                    {
                        action = Some(WordTableAction::ToggleFavorite(word.id));
                    }
                });
            });
        });

    action
}
