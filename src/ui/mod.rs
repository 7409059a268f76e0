mod controls;
mod keyboard;
mod main_ui;
mod menu;
mod slide_view;
mod statusbar;
pub mod theme;
