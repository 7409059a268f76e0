use crate::app::PresenterApp;
use egui::{Color32, Frame, Margin, RichText};

impl PresenterApp {
    /// The prev / close / next affordance, floating over the slide. Prev is
    /// inert on the first slide and next on the last, mirroring the no-op
    /// navigation semantics at either end.
    pub fn render_controls(&mut self, ctx: &egui::Context) {
        let Some(controls) = self.session.as_ref().map(|s| s.controls()) else {
            return;
        };

        let mut retreat = false;
        let mut close = false;
        let mut advance = false;

        egui::Area::new(egui::Id::new("presentation-controls"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -16.0))
            .show(ctx, |ui| {
                Frame::NONE
                    .fill(Color32::from_black_alpha(140))
                    .inner_margin(Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = 12.0;
                            if ui
                                .add_enabled(!controls.at_first, control_button("<"))
                                .clicked()
                            {
                                retreat = true;
                            }
                            if ui.add(control_button("×")).clicked() {
                                close = true;
                            }
                            if ui
                                .add_enabled(!controls.at_last, control_button(">"))
                                .clicked()
                            {
                                advance = true;
                            }
                        });
                    });
            });

        if retreat {
            self.pending_retreat = true;
        }
        if close {
            self.pending_exit = true;
        }
        if advance {
            self.pending_advance = true;
        }
    }
}

fn control_button(glyph: &str) -> egui::Button<'_> {
    egui::Button::new(RichText::new(glyph).size(20.0)).fill(Color32::TRANSPARENT)
}
