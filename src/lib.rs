// Crate root library declaration and module exports.
pub mod cli;
pub mod color_utils;
pub mod config;
pub mod context;
pub mod epicycle;
pub mod leaderboard;
pub mod logging;
pub mod materials;
pub mod model;
pub mod phasor;
pub mod storage;
pub mod store;
pub mod ticker;

#[cfg(feature = "tui")]
pub mod tui;
