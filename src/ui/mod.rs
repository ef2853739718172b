//! Terminal UI: the equation with its answer field, operator and level
//! buttons, the bean grid with its palette, and the feedback line.

mod app;
pub mod board_widget;
pub mod game_view;

pub use app::App;
