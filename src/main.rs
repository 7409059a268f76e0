mod app;
mod deck;
mod deck_loader;
mod errors;
mod logging;
mod registry;
mod session;
mod settings;
mod tests;
mod ui;

use app::PresenterApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let verbose = std::env::args().any(|arg| arg == "--verbose");
    logging::init_tracing(verbose);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_icon(load_icon())
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "DeckView",
        native_options,
        Box::new(|cc| Ok(Box::new(PresenterApp::new(cc)))),
    )
}

fn load_icon() -> egui::IconData {
    // Draw a simple slide glyph: a light canvas with an accent title bar
    let size = 64usize;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let on_canvas = (8..56).contains(&x) && (14..50).contains(&y);
            let on_title_bar = on_canvas && (18..26).contains(&y) && (14..44).contains(&x);

            if on_title_bar {
                rgba[idx] = 255;
                rgba[idx + 1] = 200;
                rgba[idx + 2] = 80;
                rgba[idx + 3] = 255;
            } else if on_canvas {
                rgba[idx] = 235;
                rgba[idx + 1] = 235;
                rgba[idx + 2] = 240;
                rgba[idx + 3] = 255;
            } else {
                rgba[idx] = 24;
                rgba[idx + 1] = 24;
                rgba[idx + 2] = 28;
                rgba[idx + 3] = 255;
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
