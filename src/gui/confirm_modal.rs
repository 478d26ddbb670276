use eframe::egui;

/// Yes/no confirmation for destructive actions.
pub struct ConfirmModal {
    id: &'static str,
    open: bool,
    message: String,
    confirm_label: String,
}

impl ConfirmModal {
    pub fn new(id: &'static str) -> Self {
        Self { id, open: false, message: String::new(), confirm_label: "OK".to_string() }
    }

    pub fn ask(&mut self, message: impl Into<String>, confirm_label: impl Into<String>) {
        self.message = message.into();
        self.confirm_label = confirm_label.into();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `Some(true)` once confirmed, `Some(false)` once dismissed.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<bool> {
        if !self.open {
            return None;
        }

        let mut result: Option<bool> = None;

        let modal = egui::Modal::new(egui::Id::new(self.id)).show(ctx, |ui| {
            ui.set_width(340.0);
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(ui.visuals().warn_fg_color));
                ui.label(egui::RichText::new(&self.message).size(14.0));
            });

            ui.add_space(15.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let confirm = egui::Button::new(
                    egui::RichText::new(&self.confirm_label).color(ui.visuals().error_fg_color),
                );
                if ui.add(confirm).clicked() {
                    result = Some(true);
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    result = Some(false);
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            return Some(result.unwrap_or(false));
        }

        result
    }
}
