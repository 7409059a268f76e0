use crate::registry::PresentationRegistry;
use crate::session::PresentationSession;
use crate::settings::Settings;

use eframe::egui;
use std::path::PathBuf;

/// Page-level mode: the deck menu, or an active presentation. Kept in
/// lockstep with session presence — `Active` iff a session exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Active,
}

pub struct PresenterApp {
    // Settings
    pub settings: Settings,

    // Deck catalog and the zero-or-one live session
    pub registry: PresentationRegistry,
    pub session: Option<PresentationSession>,
    pub mode: Mode,

    // Menu state
    pub menu_query: String,
    pub load_error: Option<String>,

    // Fullscreen
    pub is_fullscreen: bool,

    // Pending navigation actions (deferred; applied once per frame)
    pub pending_advance: bool,
    pub pending_retreat: bool,
    pub pending_first: bool,
    pub pending_last: bool,
    pub pending_exit: bool,
    pub pending_start: Option<usize>,
}

impl PresenterApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        configure_style(&cc.egui_ctx);

        let mut app = Self::bootstrap(Settings::load());

        // Restore the last deck folder
        if app.settings.restore_session {
            if let Some(folder) = app.settings.last_folder.clone() {
                if folder.exists() {
                    app.restore_folder(&folder);
                }
            }
        }

        // Command line argument: a deck file or a folder of decks
        if let Some(path) = std::env::args()
            .skip(1)
            .find(|arg| !arg.starts_with('-'))
            .map(PathBuf::from)
        {
            if path.is_dir() {
                app.load_folder(&path);
            } else if crate::deck_loader::is_deck_file(&path) {
                app.load_deck_file(&path);
            } else {
                log::warn!("Ignoring argument {}: not a deck file or folder", path.display());
            }
        }

        app
    }

    /// Core construction without the eframe context; also the test entry.
    pub(crate) fn bootstrap(settings: Settings) -> Self {
        Self {
            settings,
            registry: PresentationRegistry::new(),
            session: None,
            mode: Mode::List,
            menu_query: String::new(),
            load_error: None,
            is_fullscreen: false,
            pending_advance: false,
            pending_retreat: false,
            pending_first: false,
            pending_last: false,
            pending_exit: false,
            pending_start: None,
        }
    }
}

fn configure_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.window_shadow = egui::epaint::Shadow::NONE;
    style.visuals.popup_shadow = egui::epaint::Shadow::NONE;
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
