use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // Appearance
    pub theme: Theme,
    pub show_statusbar: bool,
    pub show_controls: bool,

    // Presenting
    pub fullscreen_on_present: bool,
    /// Design-space size slides are laid out in; the viewport scale is
    /// derived from it every frame.
    pub slide_width: f32,
    pub slide_height: f32,

    // Deck discovery
    pub include_subfolders: bool,
    pub recent_folders: Vec<PathBuf>,
    pub max_recent_folders: usize,

    // Session
    pub restore_session: bool,
    pub last_folder: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            show_statusbar: true,
            show_controls: true,

            fullscreen_on_present: true,
            slide_width: 1024.0,
            slide_height: 768.0,

            include_subfolders: false,
            recent_folders: Vec::new(),
            max_recent_folders: 20,

            restore_session: true,
            last_folder: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
    System,
}

impl Settings {
    pub fn load() -> Self {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "deckview", "DeckView") {
            let config_path = proj_dirs.config_dir().join("settings.json");
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(settings) = serde_json::from_str(&content) {
                        return settings;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "deckview", "DeckView") {
            let config_dir = proj_dirs.config_dir();
            let _ = std::fs::create_dir_all(config_dir);
            let config_path = config_dir.join("settings.json");
            if let Ok(content) = serde_json::to_string_pretty(self) {
                let _ = std::fs::write(config_path, content);
            }
        }
    }

    pub fn add_recent_folder(&mut self, path: PathBuf) {
        self.recent_folders.retain(|p| p != &path);
        self.recent_folders.insert(0, path);
        if self.recent_folders.len() > self.max_recent_folders {
            self.recent_folders.truncate(self.max_recent_folders);
        }
    }

    pub fn design_size(&self) -> egui::Vec2 {
        egui::Vec2::new(self.slide_width.max(1.0), self.slide_height.max(1.0))
    }
}
