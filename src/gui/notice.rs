use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::gui::theme::Theme;

const NOTICE_DURATION: Duration = Duration::from_millis(2500);

/// Short-lived informational message drawn above the bottom edge.
pub struct Notice {
    message: Option<String>,
    shown_at: Option<Instant>,
}

impl Notice {
    pub fn new() -> Self {
        Self { message: None, shown_at: None }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.shown_at = Some(Instant::now());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
        self.shown_at = None;
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        let (Some(message), Some(shown_at)) = (&self.message, self.shown_at) else {
            return;
        };

        let elapsed = shown_at.elapsed();
        if elapsed >= NOTICE_DURATION {
            self.clear_message();
            return;
        }

        egui::Area::new(egui::Id::new("notice"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -32.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(1.5, theme.primary(ctx)))
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("ℹ").color(theme.blue(ctx)));
                            ui.label(message.as_str());
                        });
                    });
            });

        ctx.request_repaint_after(NOTICE_DURATION - elapsed);
    }
}

impl Default for Notice {
    fn default() -> Self {
        Self::new()
    }
}
