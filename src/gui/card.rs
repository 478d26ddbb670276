use eframe::egui::{
    self,
    Align,
    Layout,
    RichText,
    Sense,
    Stroke,
    UiBuilder,
};

use crate::{
    core::{
        FontSize,
        GestureInterpreter,
        Swipe,
        Word,
    },
    gui::theme::Theme,
};

const CARD_MAX_WIDTH: f32 = 420.0;
const CARD_PADDING: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    ToggleFavorite,
    ToggleLearned,
    Pronounce,
    Swipe(Swipe),
}

/// Fully opaque until 150 points of drag, fading out by 200.
fn drag_opacity(offset: f32) -> f32 {
    let distance = offset.abs();
    if distance <= 150.0 {
        1.0
    } else {
        (1.0 - (distance - 150.0) / 50.0).max(0.0)
    }
}

pub fn word_card(
    ui: &mut egui::Ui,
    word: &Word,
    font_size: FontSize,
    gesture: &mut GestureInterpreter,
    theme: &Theme,
) -> Option<CardAction> {
    let ctx = ui.ctx().clone();
    let width = ui.available_width().min(CARD_MAX_WIDTH);
    let height = (width * 4.0 / 3.0).min(ui.available_height() - 80.0).max(320.0);
    let (base_rect, _) = ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());

    gesture.attach(word.id);
    let drag = ui.interact(base_rect, ui.id().with("word_card"), Sense::drag());
    let mut action = None;

    if drag.drag_started() {
        gesture.begin();
    }
    if drag.dragged() {
        gesture.drag_by(drag.drag_delta().x);
    }
    if drag.drag_stopped() {
        if let Some(swipe) = gesture.release() {
            action = Some(CardAction::Swipe(swipe));
        }
    }
    if drag.dragged() || gesture.is_active() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if drag.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }

    let offset = gesture.offset();
    let opacity = drag_opacity(offset);
    let card_rect = base_rect.translate(egui::vec2(offset, 0.0));

    ui.painter().rect(
        card_rect,
        24.0,
        theme.card_fill(&ctx).gamma_multiply(opacity),
        Stroke::new(1.0, theme.card_stroke(&ctx).gamma_multiply(opacity)),
        egui::StrokeKind::Inside,
    );

    let mut content = ui.new_child(
        UiBuilder::new()
            .max_rect(card_rect.shrink(CARD_PADDING))
            .layout(Layout::top_down(Align::Center)),
    );
    content.multiply_opacity(opacity);
    content.style_mut().interaction.selectable_labels = false;

    if let Some(card_action) = card_contents(&mut content, word, font_size, theme) {
        action = Some(card_action);
    }

    action
}

fn card_contents(
    ui: &mut egui::Ui,
    word: &Word,
    font_size: FontSize,
    theme: &Theme,
) -> Option<CardAction> {
    let ctx = ui.ctx().clone();
    let mut action = None;

    ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
        if word.learned {
            ui.label(RichText::new("✔ LEARNED").small().strong().color(theme.green(&ctx)));
        } else {
            ui.label(" ");
        }
    });

    ui.add_space(ui.available_height() * 0.12);

    ui.label(RichText::new(&word.en).size(font_size.card_points()).strong());
    ui.add_space(12.0);
    ui.label(theme.muted(&ctx, &word.cn).size(20.0));

    if let Some(stars) = word.difficulty_stars() {
        ui.add_space(6.0);
        ui.label(RichText::new(stars).color(theme.primary(&ctx)));
    }

    ui.add_space(12.0);
    if ui
        .add(egui::Button::new(RichText::new("🔊").size(20.0)).corner_radius(20.0))
        .on_hover_text("Pronounce")
        .clicked()
    {
        action = Some(CardAction::Pronounce);
    }

    if let Some(example) = &word.example {
        ui.add_space(16.0);
        egui::Frame::group(ui.style()).corner_radius(12.0).inner_margin(12.0).show(ui, |ui| {
            ui.label(theme.muted(&ctx, &format!("\"{}\"", example)).italics());
        });
    }

    ui.with_layout(Layout::bottom_up(Align::Center), |ui| {
        ui.label(theme.muted(&ctx, "SWIPE →").small());
        ui.separator();
        let (favorite_clicked, learned_clicked) = egui::Sides::new().show(
            ui,
            |ui| {
                let (star, color) = if word.is_favorite {
                    ("★ Save", theme.primary(&ctx))
                } else {
                    ("☆ Save", ui.visuals().weak_text_color())
                };
                ui.add(egui::Button::new(RichText::new(star).color(color)).frame(false)).clicked()
            },
            |ui| {
                let (label, color) = if word.learned {
                    ("✔ Done", theme.green(&ctx))
                } else {
                    ("✔ Mark", ui.visuals().weak_text_color())
                };
                ui.add(egui::Button::new(RichText::new(label).color(color)).frame(false)).clicked()
            },
        );
        if favorite_clicked {
            action = Some(CardAction::ToggleFavorite);
        } else if learned_clicked {
            action = Some(CardAction::ToggleLearned);
        }
    });

    action
}

#[cfg(test)]
mod tests {
    use egui::{
        pos2,
        Event,
        Pos2,
        RawInput,
        Rect,
    };

    use super::*;
    use crate::core::{
        gesture::DEFAULT_SWIPE_THRESHOLD,
        models::seed_words,
    };

    struct Harness {
        ctx: egui::Context,
        gesture: GestureInterpreter,
        time: f64,
    }

    impl Harness {
        fn new() -> Self {
            Self { ctx: egui::Context::default(), gesture: GestureInterpreter::default(), time: 0.0 }
        }

        fn frame(&mut self, word: &Word, events: Vec<Event>) -> Option<CardAction> {
            self.time += 1.0 / 60.0;
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 1000.0))),
                time: Some(self.time),
                events,
                ..Default::default()
            };
            let theme = Theme::default();
            let gesture = &mut self.gesture;
            let mut action = None;
            let _ = self.ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    action = word_card(ui, word, FontSize::Medium, gesture, &theme);
                });
            });
            action
        }

        fn press(&mut self, word: &Word, pos: Pos2) -> Option<CardAction> {
            self.frame(word, vec![Event::PointerMoved(pos)]);
            self.frame(word, vec![pointer_button(pos, true)])
        }

        fn release(&mut self, word: &Word, pos: Pos2) -> Option<CardAction> {
            self.frame(word, vec![pointer_button(pos, false)])
        }
    }

    fn pointer_button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn drag(harness: &mut Harness, word: &Word, from: Pos2, dx: f32) -> Option<CardAction> {
        harness.press(word, from);
        harness.frame(word, vec![Event::PointerMoved(pos2(from.x + 50.0, from.y))]);
        harness.frame(word, vec![Event::PointerMoved(pos2(from.x + dx, from.y))]);
        harness.release(word, pos2(from.x + dx, from.y))
    }

    #[test]
    fn test_drag_opacity() {
        assert_eq!(drag_opacity(0.0), 1.0);
        assert_eq!(drag_opacity(-150.0), 1.0);
        assert!((drag_opacity(175.0) - 0.5).abs() < f32::EPSILON);
        assert_eq!(drag_opacity(-250.0), 0.0);
    }

    #[test]
    fn test_drag_from_padding_swipes() {
        let words = seed_words();
        let mut harness = Harness::new();
        harness.frame(&words[0], Vec::new());
        let action = drag(&mut harness, &words[0], pos2(20.0, 300.0), 250.0);
        assert_eq!(action, Some(CardAction::Swipe(Swipe::Right)));
        assert!(!harness.gesture.is_active());
    }

    #[test]
    fn test_drag_from_headword_swipes() {
        let words = seed_words();
        let mut harness = Harness::new();
        harness.frame(&words[0], Vec::new());
        let action = drag(&mut harness, &words[0], pos2(218.0, 130.0), 250.0);
        assert_eq!(action, Some(CardAction::Swipe(Swipe::Right)));

        let action = drag(&mut harness, &words[0], pos2(218.0, 200.0), -150.0);
        assert_eq!(action, Some(CardAction::Swipe(Swipe::Left)));
    }

    #[test]
    fn test_card_change_mid_drag_resets_gesture() {
        let words = seed_words();
        let (first, second) = (&words[0], &words[1]);
        let mut harness = Harness::new();
        harness.frame(first, Vec::new());

        let start = pos2(20.0, 300.0);
        harness.press(first, start);
        harness.frame(first, vec![Event::PointerMoved(pos2(start.x + 50.0, start.y))]);
        harness.frame(first, vec![Event::PointerMoved(pos2(start.x + 250.0, start.y))]);
        assert!(harness.gesture.is_active());
        assert!(harness.gesture.offset() > DEFAULT_SWIPE_THRESHOLD);

        harness.frame(second, Vec::new());
        assert!(!harness.gesture.is_active());
        assert_eq!(drag_opacity(harness.gesture.offset()), 1.0);

        let action = harness.release(second, pos2(start.x + 250.0, start.y));
        assert_eq!(action, None);
        assert!(!harness.gesture.is_active());
        assert_eq!(harness.gesture.offset(), 0.0);
    }
}
