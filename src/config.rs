//! Session configuration, loadable from JSON supplied by the host page.

use serde::Deserialize;

/// Fallback RNG seed when the host supplies none.
pub const DEFAULT_SEED: u32 = 12345;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Maze cell rows.
    pub rows: u32,
    /// Maze cell columns.
    pub cols: u32,
    /// Playfield width in world units.
    pub width: f32,
    /// Playfield height in world units.
    pub height: f32,
    /// RNG seed; the facade passes a fresh one per session so each maze is
    /// different, tests pin it.
    #[serde(default)]
    pub seed: Option<u32>,
    /// Fixed start cell for the generator; a random cell when absent.
    #[serde(default)]
    pub start: Option<(u32, u32)>,
}

impl SessionConfig {
    pub fn new(rows: u32, cols: u32, width: f32, height: f32) -> Self {
        Self {
            rows,
            cols,
            width,
            height,
            seed: None,
            start: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SessionConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.rows == 0 || self.cols == 0 {
            return Err(format!(
                "grid dimensions must be positive, got {}x{}",
                self.rows, self.cols
            ));
        }
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(format!(
                "playfield dimensions must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if let Some((row, col)) = self.start {
            if row >= self.rows || col >= self.cols {
                return Err(format!(
                    "start cell ({row}, {col}) outside {}x{} grid",
                    self.rows, self.cols
                ));
            }
        }
        Ok(())
    }

    /// World-unit size of one cell along X.
    #[inline]
    pub fn unit_x(&self) -> f32 {
        self.width / self.cols as f32
    }

    /// World-unit size of one cell along Y.
    #[inline]
    pub fn unit_y(&self) -> f32 {
        self.height / self.rows as f32
    }
}
