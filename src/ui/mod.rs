pub mod app;
pub mod confetti;
pub mod game_panel;
pub mod settings;
