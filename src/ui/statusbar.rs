use crate::app::PresenterApp;
use egui::{Color32, Frame, Margin, RichText};

impl PresenterApp {
    pub(crate) fn render_statusbar(&mut self, ctx: &egui::Context) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        egui::TopBottomPanel::bottom("statusbar")
            .frame(
                Frame::NONE
                    .fill(Color32::from_rgb(25, 25, 28))
                    .inner_margin(Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(session.deck().display_title())
                            .color(Color32::WHITE)
                            .size(12.0),
                    );

                    if let Some(index) = session.current_index() {
                        ui.label(
                            RichText::new(format!("Slide {}/{}", index + 1, session.slide_count()))
                                .color(Color32::GRAY)
                                .size(11.0),
                        );
                        if let Some(slide) = session.current_slide() {
                            let steps = slide.step_count();
                            if steps > 0 {
                                ui.label(
                                    RichText::new(format!(
                                        "Step {}/{}",
                                        slide.active_step_count(),
                                        steps
                                    ))
                                    .color(Color32::GRAY)
                                    .size(11.0),
                                );
                            }
                        }
                    }
                });
            });
    }
}
