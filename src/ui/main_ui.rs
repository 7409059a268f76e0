use crate::app::{Mode, PresenterApp};

impl eframe::App for PresenterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);
        self.handle_dropped_files(ctx);

        crate::ui::theme::apply_theme(ctx, &self.settings);

        match self.mode {
            Mode::List => {
                self.render_menu(ctx);
            }
            Mode::Active => {
                if self.settings.show_statusbar {
                    self.render_statusbar(ctx);
                }
                self.render_slide_view(ctx);
                if self.settings.show_controls {
                    self.render_controls(ctx);
                }
            }
        }

        // State transitions happen once per frame, after rendering
        self.apply_pending(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.save();
    }
}
