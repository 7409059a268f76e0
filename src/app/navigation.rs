use super::{Mode, PresenterApp};
use crate::deck::Deck;
use crate::deck_loader;
use crate::session::{NavAction, SessionEvent};

use eframe::egui;
use std::path::Path;

impl PresenterApp {
    /// Loads a folder of decks, replacing the current catalog, and remembers
    /// it for session restore.
    pub fn load_folder(&mut self, folder: &Path) {
        if let Some(decks) = self.scan_folder(folder) {
            self.registry.reload(decks);
            self.settings.last_folder = Some(folder.to_path_buf());
            self.settings.add_recent_folder(folder.to_path_buf());
        }
    }

    /// Startup restore path: only populates an empty catalog, so an explicit
    /// command line argument afterwards still wins.
    pub(crate) fn restore_folder(&mut self, folder: &Path) {
        if let Some(decks) = self.scan_folder(folder) {
            self.registry.initialize(decks);
        }
    }

    fn scan_folder(&mut self, folder: &Path) -> Option<Vec<Deck>> {
        match deck_loader::load_folder(folder, self.settings.include_subfolders) {
            Ok(decks) => {
                log::info!(
                    "Loaded {} presentation(s) from {}",
                    decks.len(),
                    folder.display()
                );
                self.load_error = if decks.is_empty() {
                    Some(format!("No slide decks found in {}", folder.display()))
                } else {
                    None
                };
                Some(decks)
            }
            Err(err) => {
                log::error!("Failed to load {}: {err:#}", folder.display());
                self.load_error = Some(format!("{err:#}"));
                None
            }
        }
    }

    pub fn load_deck_file(&mut self, path: &Path) {
        match deck_loader::load_deck(path) {
            Ok(deck) => {
                log::info!("Loaded deck {}", path.display());
                self.load_error = None;
                self.registry.reload(vec![deck]);
            }
            Err(err) => {
                log::error!("Failed to load {}: {}", path.display(), err);
                self.load_error = Some(err.to_string());
            }
        }
    }

    pub fn open_folder_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new().pick_folder() {
            self.load_folder(&path);
        }
    }

    /// Starts the selected presentation. An already-active session is torn
    /// down first; only one can be live at a time.
    pub fn start_presentation(&mut self, id: usize, ctx: &egui::Context) {
        self.exit_presentation(ctx);
        match self.registry.start(id) {
            Ok(session) => {
                log::info!("Starting presentation '{}'", session.deck().display_title());
                self.session = Some(session);
                self.mode = Mode::Active;
                if self.settings.fullscreen_on_present {
                    self.set_fullscreen(true, ctx);
                }
            }
            Err(err) => {
                log::warn!("Could not start presentation {id}: {err}");
            }
        }
    }

    /// Ends the live session and returns to the menu. With the session gone,
    /// the presentation key table and controls are no longer polled at all.
    pub fn exit_presentation(&mut self, ctx: &egui::Context) {
        if let Some(mut session) = self.session.take() {
            session.teardown();
            log::info!("Exited presentation '{}'", session.deck().display_title());
        }
        self.mode = Mode::List;
        self.set_fullscreen(false, ctx);
    }

    fn set_fullscreen(&mut self, on: bool, ctx: &egui::Context) {
        if self.is_fullscreen != on {
            self.is_fullscreen = on;
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(on));
        }
    }

    /// Applies the navigation actions staged by this frame's input, one
    /// transition at a time. Without a live session all of them are inert.
    pub fn apply_pending(&mut self, ctx: &egui::Context) {
        if let Some(id) = self.pending_start.take() {
            self.start_presentation(id, ctx);
        }

        let mut actions: Vec<NavAction> = Vec::new();
        if std::mem::take(&mut self.pending_retreat) {
            actions.push(NavAction::Retreat);
        }
        if std::mem::take(&mut self.pending_advance) {
            actions.push(NavAction::Advance);
        }
        if std::mem::take(&mut self.pending_first) {
            actions.push(NavAction::First);
        }
        if std::mem::take(&mut self.pending_last) {
            actions.push(NavAction::Last);
        }
        if std::mem::take(&mut self.pending_exit) {
            actions.push(NavAction::Exit);
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };
        let mut exit_requested = false;
        for action in actions {
            if session.apply(action) == SessionEvent::ExitRequested {
                exit_requested = true;
            }
        }
        if exit_requested {
            self.exit_presentation(ctx);
        }
    }

    pub fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());

        for file in dropped {
            if let Some(path) = &file.path {
                if path.is_dir() {
                    self.load_folder(path);
                    break;
                } else if deck_loader::is_deck_file(path) {
                    self.load_deck_file(path);
                    break;
                }
            }
        }
    }
}
