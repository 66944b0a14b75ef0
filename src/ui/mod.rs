//! Terminal UI: the interactive game loop and its ratatui views.

mod app;
mod game_view;

pub use app::App;
