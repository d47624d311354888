//! A tiny terminal arcade shooter.
//!
//! The game itself lives in [`game`]: a pure `update` that folds one message
//! into the world and a pure `render` that turns the world into text. The
//! other modules are the terminal harness around it.

pub mod app;
pub mod event;
pub mod game;
pub mod ui;
