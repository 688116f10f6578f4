//! Maze Engine - maze game core for the labyrinth browser demos
//!
//! The host page owns the physics engine (simulation stepping, rendering,
//! collision detection); this crate owns the maze: the grid tables, the
//! randomized backtracker, wall placement and the game session state.
//!
//! Architecture:
//! - grid      - the three boolean tables
//! - generator - randomized recursive backtracker
//! - walls     - closed entries -> static obstacles
//! - session   - bodies, input, win condition
//! - facade    - wasm boundary for the host page

pub mod body;
pub mod config;
pub mod generator;
pub mod grid;
pub mod rng;
pub mod session;
pub mod walls;

mod facade;

use wasm_bindgen::prelude::*;

pub use body::{Body, Shape, LABEL_BALL, LABEL_BOUNDS, LABEL_GOAL, LABEL_WALL};
pub use config::SessionConfig;
pub use facade::Game;
pub use grid::MazeGrid;
pub use session::GameCore;
pub use walls::Wall;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Maze WASM engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
