//! Axis-aligned bounding boxes
//!
//! Sprites are centre-anchored, so a box is built from the entity position
//! and its sprite size and then normalised to a top-left origin.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// An axis-aligned rectangle with `(x, y)` at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of `size` centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self::new(center.x - half.x, center.y - half.y, size.x, size.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Check that the box can take part in an overlap test
    pub fn validate(&self) -> SimResult<()> {
        let finite = [self.x, self.y, self.w, self.h].iter().all(|v| v.is_finite());
        if !finite {
            return Err(SimError::InvalidCollisionOperand(format!("non-finite box {:?}", self)));
        }
        if self.w < 0.0 || self.h < 0.0 {
            return Err(SimError::InvalidCollisionOperand(format!("negative extent {:?}", self)));
        }
        Ok(())
    }

    /// Strict overlap test; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Overlap test tolerant of entities whose box is unavailable
///
/// A missing or invalid operand (entity still loading, mid-destruction, or
/// carrying a corrupt size) is reported as "no overlap".
pub fn overlaps(a: Option<&Aabb>, b: Option<&Aabb>) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    for operand in [a, b] {
        if let Err(e) = operand.validate() {
            log::debug!("Skipping overlap test: {e}");
            return false;
        }
    }
    a.overlaps(b)
}
