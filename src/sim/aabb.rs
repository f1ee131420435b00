//! Axis-aligned bounding boxes and world extents
//!
//! A box is anchored at its top-left corner (x1, y1) and extends by its size:
//! - x2 = x1 + width
//! - y2 = y1 + height
//!
//! Screen convention: y grows downward, so "top" is the smaller y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner (x1, y1)
    pub min: Vec2,
    /// Bottom-right corner (x2, y2)
    pub max: Vec2,
}

impl Aabb {
    /// Derive a box from a top-left position and a size
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self {
            min: position,
            max: position + size,
        }
    }

    #[inline]
    pub fn x1(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn y1(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn x2(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn y2(&self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Same box moved by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Grow the box by `margin` on every side
    pub fn expanded(&self, margin: Vec2) -> Self {
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// Strict overlap on both axes (touching edges do not count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let overlaps_x = self.min.x < other.max.x && self.max.x > other.min.x;
        let overlaps_y = self.min.y < other.max.y && self.max.y > other.min.y;
        overlaps_x && overlaps_y
    }

    /// True when this box lies entirely outside `region`.
    ///
    /// A box straddling an edge of the region is still inside.
    pub fn is_outside(&self, region: &Aabb) -> bool {
        self.max.x < region.min.x
            || self.min.x > region.max.x
            || self.max.y < region.min.y
            || self.min.y > region.max.y
    }

    /// Horizontal center
    pub fn center_x(&self) -> f32 {
        (self.min.x + self.max.x) / 2.0
    }
}

/// World extents (origin at top-left)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
}

impl World {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The exact world rectangle
    pub fn bounds(&self) -> Aabb {
        Aabb {
            min: Vec2::ZERO,
            max: Vec2::new(self.width, self.height),
        }
    }

    /// The world grown by one full world extent on every side.
    ///
    /// Movement ignores entities outside this region.
    pub fn expanded_bounds(&self) -> Aabb {
        self.bounds().expanded(Vec2::new(self.width, self.height))
    }

    /// Exact-bounds containment: false only when the box is fully outside
    pub fn contains(&self, aabb: &Aabb) -> bool {
        !aabb.is_outside(&self.bounds())
    }
}
