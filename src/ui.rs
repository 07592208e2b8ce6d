//! Ratatui front-end for the course catalog: a year tab bar, a grid of course
//! cards, and modal overlays for details, the course form, and prompts.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
