//! Simulation-body descriptors
//!
//! The host's physics engine owns the real rigid bodies; the session keeps
//! one descriptor per body and the host mirrors changes (static flag,
//! velocity, gravity) into the simulation. Bodies are found by their label,
//! never by identity.

use serde::Serialize;

pub const LABEL_WALL: &str = "wall";
pub const LABEL_BALL: &str = "ball";
pub const LABEL_GOAL: &str = "goal";
/// Arena border walls. Unlike maze walls these stay static after the win
/// condition fires.
pub const LABEL_BOUNDS: &str = "bounds";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rect { width: f32, height: f32 },
    Circle { radius: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    pub label: &'static str,
    pub x: f32,
    pub y: f32,
    pub shape: Shape,
    pub is_static: bool,
    pub vx: f32,
    pub vy: f32,
}

impl Body {
    pub fn static_rect(label: &'static str, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            label,
            x,
            y,
            shape: Shape::Rect { width, height },
            is_static: true,
            vx: 0.0,
            vy: 0.0,
        }
    }

    pub fn dynamic_circle(label: &'static str, x: f32, y: f32, radius: f32) -> Self {
        Self {
            label,
            x,
            y,
            shape: Shape::Circle { radius },
            is_static: false,
            vx: 0.0,
            vy: 0.0,
        }
    }

    /// Width and height of the shape's bounding box.
    pub fn extents(&self) -> (f32, f32) {
        match self.shape {
            Shape::Rect { width, height } => (width, height),
            Shape::Circle { radius } => (radius * 2.0, radius * 2.0),
        }
    }
}
