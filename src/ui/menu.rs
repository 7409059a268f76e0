use crate::app::PresenterApp;
use egui::{Color32, RichText, Vec2};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::path::PathBuf;

impl PresenterApp {
    /// List mode: every loaded deck as a clickable entry, with a fuzzy
    /// search box on top. Clicking an entry stages a session start.
    pub fn render_menu(&mut self, ctx: &egui::Context) {
        let mut open_folder = false;
        let mut open_recent: Option<PathBuf> = None;
        let mut start: Option<usize> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Presentations").size(28.0));
            });
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let search_width = (ui.available_width() - 130.0).max(80.0);
                ui.add_sized(
                    Vec2::new(search_width, 28.0),
                    egui::TextEdit::singleline(&mut self.menu_query)
                        .hint_text("Search presentations..."),
                );
                if ui.button("Open folder…").clicked() {
                    open_folder = true;
                }
            });

            if let Some(error) = &self.load_error {
                ui.add_space(8.0);
                ui.colored_label(Color32::from_rgb(255, 120, 100), error);
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            if self.registry.is_empty() {
                ui.label(
                    RichText::new("Open a folder containing .deck files to get started.")
                        .color(Color32::GRAY),
                );
                if !self.settings.recent_folders.is_empty() {
                    ui.add_space(12.0);
                    ui.label(RichText::new("Recent folders").size(13.0).strong());
                    for folder in self.settings.recent_folders.clone() {
                        if ui.link(folder.display().to_string()).clicked() {
                            open_recent = Some(folder);
                        }
                    }
                }
                return;
            }

            let entries = self.filtered_entries();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (id, title) in entries {
                        let response = ui.add_sized(
                            Vec2::new(ui.available_width(), 32.0),
                            egui::Button::new(RichText::new(&title).size(16.0))
                                .fill(Color32::TRANSPARENT),
                        );
                        if response.clicked() {
                            start = Some(id);
                        }
                    }
                });
        });

        if open_folder {
            self.open_folder_dialog();
        }
        if let Some(folder) = open_recent {
            self.load_folder(&folder);
        }
        if let Some(id) = start {
            self.pending_start = Some(id);
        }
    }

    /// Menu entries matching the search query, best score first. An empty
    /// query keeps the load order.
    fn filtered_entries(&self) -> Vec<(usize, String)> {
        let query = self.menu_query.trim();
        if query.is_empty() {
            return self
                .registry
                .entries()
                .map(|(id, title)| (id, title.to_string()))
                .collect();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize, String)> = self
            .registry
            .entries()
            .filter_map(|(id, title)| {
                matcher
                    .fuzzy_match(title, query)
                    .map(|score| (score, id, title.to_string()))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .map(|(_, id, title)| (id, title))
            .collect()
    }
}
