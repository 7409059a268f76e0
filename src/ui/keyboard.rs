use crate::app::{Mode, PresenterApp};
use egui::{Key, Modifiers};

const RETREAT_KEYS: &[Key] = &[Key::Backspace, Key::PageUp, Key::ArrowLeft, Key::ArrowUp];
const ADVANCE_KEYS: &[Key] = &[Key::Space, Key::PageDown, Key::ArrowRight, Key::ArrowDown];

impl PresenterApp {
    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        match self.mode {
            Mode::Active => self.handle_presentation_keys(ctx),
            Mode::List => self.handle_menu_keys(ctx),
        }
    }

    /// The presentation key table. Matched keys are consumed so no widget
    /// underneath reacts to them as well; unmatched keys fall through.
    fn handle_presentation_keys(&mut self, ctx: &egui::Context) {
        ctx.input_mut(|i| {
            for &key in RETREAT_KEYS {
                if i.consume_key(Modifiers::NONE, key) {
                    self.pending_retreat = true;
                }
            }
            for &key in ADVANCE_KEYS {
                if i.consume_key(Modifiers::NONE, key) {
                    self.pending_advance = true;
                }
            }
            if i.consume_key(Modifiers::NONE, Key::Home) {
                self.pending_first = true;
            }
            if i.consume_key(Modifiers::NONE, Key::End) {
                self.pending_last = true;
            }
            if i.consume_key(Modifiers::NONE, Key::Escape) {
                self.pending_exit = true;
            }
        });
    }

    fn handle_menu_keys(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.menu_query.clear();
        }
    }
}
