use crate::app::PresenterApp;
use crate::deck::{Block, StepStyle};
use egui::{Color32, Frame, RichText};

// Design-space font sizes, multiplied by the viewport fit scale.
const HEADING_PT: f32 = 44.0;
const BODY_PT: f32 = 26.0;
const BLOCK_GAP: f32 = 14.0;

const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(255, 200, 80);

impl PresenterApp {
    pub fn render_slide_view(&mut self, ctx: &egui::Context) {
        let design = self.settings.design_size();

        egui::CentralPanel::default()
            .frame(Frame::NONE.fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| {
                let Some(session) = self.session.as_ref() else {
                    return;
                };
                let Some(slide) = session.current_slide() else {
                    return;
                };
                if !slide.visible {
                    return;
                }

                let viewport = ui.available_size();
                let scale = self.slide_scale(viewport);
                let slide_height = design.y * scale;

                ui.add_space(((viewport.y - slide_height) * 0.5).max(0.0));
                ui.vertical_centered(|ui| {
                    ui.set_max_width(design.x * scale);
                    ui.spacing_mut().item_spacing.y = BLOCK_GAP * scale;

                    if let Some(heading) = &slide.heading {
                        ui.label(RichText::new(heading).size(HEADING_PT * scale).strong());
                        ui.add_space(BLOCK_GAP * scale);
                    }
                    for block in &slide.blocks {
                        ui.label(block_text(block, scale));
                    }
                });
            });
    }
}

/// Step blocks that are not yet active render fully transparent: they keep
/// their place in the layout (visibility semantics) without being readable.
fn block_text(block: &Block, scale: f32) -> RichText {
    let text = RichText::new(&block.text).size(BODY_PT * scale);
    let Some(marker) = &block.step else {
        return text;
    };
    if !marker.active {
        return text.color(Color32::TRANSPARENT);
    }
    match marker.style {
        StepStyle::Reveal => text,
        StepStyle::Highlight => text.color(HIGHLIGHT_COLOR).strong(),
        StepStyle::Dim => text.weak(),
        StepStyle::Big => text.size(BODY_PT * 1.5 * scale).strong(),
    }
}
