//! Game session - wires the maze into the host simulation world
//!
//! Owns the grid tables, the body descriptors and the win state. The host
//! page forwards key-down and collision-start events here and mirrors the
//! resulting body and gravity changes into its physics engine. Generation
//! runs to completion inside `new`; nothing here interleaves with the
//! simulation loop.

use serde::Serialize;

use crate::body::{Body, LABEL_BALL, LABEL_BOUNDS, LABEL_GOAL, LABEL_WALL};
use crate::config::{SessionConfig, DEFAULT_SEED};
use crate::generator::carve;
use crate::grid::MazeGrid;
use crate::rng::roll;
use crate::walls::{arena_bounds, materialize};

/// Key codes the demo binds (W/D/S/A).
pub const KEY_UP: u32 = 87;
pub const KEY_RIGHT: u32 = 68;
pub const KEY_DOWN: u32 = 83;
pub const KEY_LEFT: u32 = 65;

/// Velocity delta applied per key press.
const KEY_DELTA: f32 = 5.0;

/// Everything the host needs to build the scene, in one serializable bundle.
#[derive(Serialize)]
struct Scene<'a> {
    walls: &'a [Body],
    ball: &'a Body,
    goal: &'a Body,
}

pub struct GameCore {
    config: SessionConfig,
    grid: MazeGrid,
    /// Arena bounds first, then one body per closed table entry. Only the
    /// static flag mutates after construction.
    walls: Vec<Body>,
    ball: Body,
    goal: Body,
    gravity_x: f32,
    gravity_y: f32,
    won: bool,
}

impl GameCore {
    pub fn new(config: SessionConfig) -> Result<Self, String> {
        config.validate()?;

        let mut rng_state = config.seed.unwrap_or(DEFAULT_SEED);
        if rng_state == 0 {
            // Zero is a fixed point of xorshift32.
            rng_state = DEFAULT_SEED;
        }

        let mut grid = MazeGrid::new(config.rows, config.cols)?;
        let (start_row, start_col) = match config.start {
            Some(cell) => cell,
            None => (
                roll(&mut rng_state, config.rows),
                roll(&mut rng_state, config.cols),
            ),
        };
        carve(&mut grid, start_row, start_col, &mut rng_state)?;

        let unit_x = config.unit_x();
        let unit_y = config.unit_y();

        let mut walls: Vec<Body> = arena_bounds(config.width, config.height)
            .iter()
            .map(|w| Body::static_rect(LABEL_BOUNDS, w.x, w.y, w.width, w.height))
            .collect();
        walls.extend(
            materialize(&grid, unit_x, unit_y)
                .iter()
                .map(|w| Body::static_rect(LABEL_WALL, w.x, w.y, w.width, w.height)),
        );

        let ball = Body::dynamic_circle(
            LABEL_BALL,
            unit_x / 2.0,
            unit_y / 2.0,
            unit_x.min(unit_y) / 4.0,
        );
        let goal = Body::static_rect(
            LABEL_GOAL,
            config.width - unit_x / 2.0,
            config.height - unit_y / 2.0,
            unit_x * 0.7,
            unit_y * 0.7,
        );

        Ok(Self {
            config,
            grid,
            walls,
            ball,
            goal,
            // Y gravity stays off until the win condition fires.
            gravity_x: 0.0,
            gravity_y: 0.0,
            won: false,
        })
    }

    pub fn rows(&self) -> u32 {
        self.config.rows
    }

    pub fn cols(&self) -> u32 {
        self.config.cols
    }

    pub fn unit_x(&self) -> f32 {
        self.config.unit_x()
    }

    pub fn unit_y(&self) -> f32 {
        self.config.unit_y()
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn walls(&self) -> &[Body] {
        &self.walls
    }

    pub fn wall(&self, idx: usize) -> Option<&Body> {
        self.walls.get(idx)
    }

    pub fn ball(&self) -> &Body {
        &self.ball
    }

    pub fn goal(&self) -> &Body {
        &self.goal
    }

    pub fn gravity(&self) -> (f32, f32) {
        (self.gravity_x, self.gravity_y)
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Apply the fixed velocity delta for a key-down event to the ball.
    /// Returns false for keys the session does not bind.
    pub fn handle_key(&mut self, key_code: u32) -> bool {
        match key_code {
            KEY_UP => self.ball.vy -= KEY_DELTA,
            KEY_RIGHT => self.ball.vx += KEY_DELTA,
            KEY_DOWN => self.ball.vy += KEY_DELTA,
            KEY_LEFT => self.ball.vx -= KEY_DELTA,
            _ => return false,
        }
        true
    }

    /// Host pushes the engine's ball state back, so key deltas stack on the
    /// velocity the simulation actually reached.
    pub fn sync_ball(&mut self, x: f32, y: f32, vx: f32, vy: f32) {
        self.ball.x = x;
        self.ball.y = y;
        self.ball.vx = vx;
        self.ball.vy = vy;
    }

    /// Test a collision-start pair against the win condition. On the win,
    /// gravity turns on and every maze wall goes dynamic; the bodies are
    /// kept, only their physical behavior changes. Returns whether this call
    /// triggered the win.
    pub fn handle_collision(&mut self, label_a: &str, label_b: &str) -> bool {
        if self.won {
            return false;
        }
        let is_win = (label_a == LABEL_BALL && label_b == LABEL_GOAL)
            || (label_a == LABEL_GOAL && label_b == LABEL_BALL);
        if !is_win {
            return false;
        }

        self.won = true;
        self.gravity_y = 1.0;
        for wall in &mut self.walls {
            if wall.label == LABEL_WALL {
                wall.is_static = false;
            }
        }
        true
    }

    /// Serialize the full scene for the host to bootstrap its world.
    pub fn scene_json(&self) -> String {
        serde_json::to_string(&Scene {
            walls: &self.walls,
            ball: &self.ball,
            goal: &self.goal,
        })
        .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core(rows: u32, cols: u32) -> GameCore {
        let mut config = SessionConfig::new(rows, cols, 600.0, 600.0);
        config.seed = Some(4242);
        config.start = Some((0, 0));
        GameCore::new(config).unwrap()
    }

    #[test]
    fn scene_has_bounds_plus_one_wall_per_closed_entry() {
        let core = core(6, 6);
        let closed = core.grid().internal_edge_count() - core.grid().open_count();
        assert_eq!(core.walls().len(), 4 + closed);
        assert_eq!(core.grid().open_count(), 6 * 6 - 1);
        assert!(core.walls().iter().all(|w| w.is_static));
    }

    #[test]
    fn ball_and_goal_sit_in_opposite_corner_cells() {
        let core = core(6, 6);
        assert_eq!((core.ball().x, core.ball().y), (50.0, 50.0));
        assert_eq!((core.goal().x, core.goal().y), (550.0, 550.0));
        assert!(!core.ball().is_static);
        assert!(core.goal().is_static);
        assert_eq!(core.goal().extents(), (70.0, 70.0));
    }

    #[test]
    fn keys_apply_fixed_velocity_deltas() {
        let mut core = core(4, 4);
        assert!(core.handle_key(KEY_UP));
        assert!(core.handle_key(KEY_RIGHT));
        assert_eq!((core.ball().vx, core.ball().vy), (5.0, -5.0));
        assert!(core.handle_key(KEY_DOWN));
        assert!(core.handle_key(KEY_LEFT));
        assert_eq!((core.ball().vx, core.ball().vy), (0.0, 0.0));
        assert!(!core.handle_key(32));
    }

    #[test]
    fn key_deltas_stack_on_synced_velocity() {
        let mut core = core(4, 4);
        core.sync_ball(120.0, 80.0, 2.0, -1.0);
        core.handle_key(KEY_RIGHT);
        assert_eq!((core.ball().vx, core.ball().vy), (7.0, -1.0));
        assert_eq!((core.ball().x, core.ball().y), (120.0, 80.0));
    }

    #[test]
    fn ball_goal_pair_wins_in_either_order() {
        let mut core = core(4, 4);
        assert!(!core.handle_collision("ball", "wall"));
        assert!(!core.won());

        assert!(core.handle_collision("goal", "ball"));
        assert!(core.won());
        assert_eq!(core.gravity(), (0.0, 1.0));
        assert!(core
            .walls()
            .iter()
            .filter(|w| w.label == LABEL_WALL)
            .all(|w| !w.is_static));
        assert!(core
            .walls()
            .iter()
            .filter(|w| w.label == LABEL_BOUNDS)
            .all(|w| w.is_static));
    }

    #[test]
    fn win_fires_only_once() {
        let mut core = core(4, 4);
        assert!(core.handle_collision("ball", "goal"));
        assert!(!core.handle_collision("ball", "goal"));
        assert!(core.won());
    }

    #[test]
    fn same_seed_builds_the_same_walls() {
        let a = core(8, 8);
        let b = core(8, 8);
        assert_eq!(a.walls(), b.walls());
    }

    #[test]
    fn scene_json_lists_every_body() {
        let core = core(3, 3);
        let json = core.scene_json();
        assert!(json.contains("\"label\":\"ball\""));
        assert!(json.contains("\"label\":\"goal\""));
        assert!(json.contains("\"label\":\"wall\""));
        assert!(json.contains("\"label\":\"bounds\""));
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(GameCore::new(SessionConfig::new(0, 6, 600.0, 600.0)).is_err());
        let mut config = SessionConfig::new(6, 6, 600.0, 600.0);
        config.start = Some((0, 6));
        assert!(GameCore::new(config).is_err());
    }
}
