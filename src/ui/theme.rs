use crate::settings::{Settings, Theme};

pub fn apply_theme(ctx: &egui::Context, settings: &Settings) {
    let visuals = match settings.theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
        // No OS detection wired up; dark is the safer default for slides
        Theme::System => egui::Visuals::dark(),
    };
    ctx.set_visuals(visuals);
}
