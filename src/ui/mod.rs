//! Terminal front ends: a full-screen board driven by the keyboard, and a
//! line-oriented prompt for plain terminals. Both run a [`Session`].

mod app;
pub mod board_widget;
mod game_view;
pub mod prompt;
pub mod session;

pub use app::App;
pub use session::{Outcome, Session};
