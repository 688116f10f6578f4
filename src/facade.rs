//! WASM boundary - the host page drives the session through this facade.
//!
//! The host owns the physics engine: it builds real bodies from the wall and
//! body getters, forwards keyboard and collision events here, and mirrors
//! the resulting state (velocity, static flags, gravity) back into its
//! world.

use wasm_bindgen::prelude::*;

use crate::config::SessionConfig;
use crate::session::GameCore;

/// Truncated millisecond clock, good enough for one maze per session.
fn clock_seed() -> u32 {
    js_sys::Date::now() as u64 as u32
}

#[wasm_bindgen]
pub struct Game {
    core: GameCore,
}

#[wasm_bindgen]
impl Game {
    /// Fresh session with a clock-derived seed: every page load gets a
    /// different maze, like the original demo.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, cols: u32, width: f32, height: f32) -> Result<Game, JsValue> {
        let mut config = SessionConfig::new(rows, cols, width, height);
        config.seed = Some(clock_seed());
        Self::from_session_config(config)
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(
        rows: u32,
        cols: u32,
        width: f32,
        height: f32,
        seed: u32,
    ) -> Result<Game, JsValue> {
        let mut config = SessionConfig::new(rows, cols, width, height);
        config.seed = Some(seed);
        Self::from_session_config(config)
    }

    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<Game, JsValue> {
        let config = SessionConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Self::from_session_config(config)
    }

    fn from_session_config(config: SessionConfig) -> Result<Game, JsValue> {
        let core = GameCore::new(config).map_err(|e| JsValue::from_str(&e))?;
        Ok(Game { core })
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.core.rows()
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 {
        self.core.cols()
    }

    #[wasm_bindgen(getter)]
    pub fn unit_x(&self) -> f32 {
        self.core.unit_x()
    }

    #[wasm_bindgen(getter)]
    pub fn unit_y(&self) -> f32 {
        self.core.unit_y()
    }

    #[wasm_bindgen(getter)]
    pub fn won(&self) -> bool {
        self.core.won()
    }

    #[wasm_bindgen(getter)]
    pub fn gravity_x(&self) -> f32 {
        self.core.gravity().0
    }

    #[wasm_bindgen(getter)]
    pub fn gravity_y(&self) -> f32 {
        self.core.gravity().1
    }

    // === WALL API ===

    pub fn wall_count(&self) -> usize {
        self.core.walls().len()
    }

    pub fn wall_x(&self, idx: usize) -> f32 {
        self.core.wall(idx).map_or(0.0, |w| w.x)
    }

    pub fn wall_y(&self, idx: usize) -> f32 {
        self.core.wall(idx).map_or(0.0, |w| w.y)
    }

    pub fn wall_w(&self, idx: usize) -> f32 {
        self.core.wall(idx).map_or(0.0, |w| w.extents().0)
    }

    pub fn wall_h(&self, idx: usize) -> f32 {
        self.core.wall(idx).map_or(0.0, |w| w.extents().1)
    }

    pub fn wall_label(&self, idx: usize) -> String {
        self.core.wall(idx).map_or_else(String::new, |w| w.label.to_string())
    }

    pub fn wall_is_static(&self, idx: usize) -> bool {
        self.core.wall(idx).map_or(true, |w| w.is_static)
    }

    /// Full scene (walls + ball + goal) as JSON, for hosts that prefer one
    /// bootstrap call over the per-index getters.
    pub fn scene_json(&self) -> String {
        self.core.scene_json()
    }

    // === BALL / GOAL API ===

    pub fn ball_x(&self) -> f32 {
        self.core.ball().x
    }

    pub fn ball_y(&self) -> f32 {
        self.core.ball().y
    }

    pub fn ball_radius(&self) -> f32 {
        self.core.ball().extents().0 / 2.0
    }

    pub fn ball_vx(&self) -> f32 {
        self.core.ball().vx
    }

    pub fn ball_vy(&self) -> f32 {
        self.core.ball().vy
    }

    pub fn goal_x(&self) -> f32 {
        self.core.goal().x
    }

    pub fn goal_y(&self) -> f32 {
        self.core.goal().y
    }

    pub fn goal_w(&self) -> f32 {
        self.core.goal().extents().0
    }

    pub fn goal_h(&self) -> f32 {
        self.core.goal().extents().1
    }

    // === EVENTS ===

    /// Key-down from the page. Returns true when the key was bound; the host
    /// then reads `ball_vx`/`ball_vy` and sets them on the engine body.
    pub fn on_key_down(&mut self, key_code: u32) -> bool {
        self.core.handle_key(key_code)
    }

    /// Engine truth pushed back before applying key deltas.
    pub fn sync_ball(&mut self, x: f32, y: f32, vx: f32, vy: f32) {
        self.core.sync_ball(x, y, vx, vy)
    }

    /// Collision-start pair from the engine's event stream. On a win the
    /// host re-reads gravity and the walls' static flags.
    pub fn on_collision_start(&mut self, label_a: &str, label_b: &str) -> bool {
        let won = self.core.handle_collision(label_a, label_b);
        if won {
            web_sys::console::log_1(&"🏁 Maze solved, walls released".into());
        }
        won
    }
}
