use serde::{Deserialize, Serialize};
use vek::Vec2;

/// Axis aligned render-space bounds. Render space is y-down.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub min: Vec2<f32>, // Top-left corner
    pub max: Vec2<f32>, // Bottom-right corner
}

impl BBox {
    /// Constructs a BBox from min and max coordinates
    pub fn new(min: Vec2<f32>, max: Vec2<f32>) -> Self {
        Self { min, max }
    }

    /// Constructs a BBox from position and size
    pub fn from_pos_size(pos: Vec2<f32>, size: Vec2<f32>) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Smallest box containing all points, `None` if there are none.
    pub fn from_points(points: &[Vec2<f32>]) -> Option<Self> {
        let first = *points.first()?;
        let mut bbox = BBox::new(first, first);
        for p in &points[1..] {
            bbox.include(*p);
        }
        Some(bbox)
    }

    /// Returns the width and height of the bounding box
    pub fn size(&self) -> Vec2<f32> {
        self.max - self.min
    }

    /// Returns the center of the bounding box
    pub fn center(&self) -> Vec2<f32> {
        (self.min + self.max) * 0.5
    }

    /// Checks if a point is inside the bounding box
    pub fn contains(&self, point: Vec2<f32>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Grows the box by `amount` on every side.
    pub fn inflate(&mut self, amount: f32) {
        self.min -= Vec2::broadcast(amount);
        self.max += Vec2::broadcast(amount);
    }

    /// Expands the bounding box to include a point
    pub fn include(&mut self, point: Vec2<f32>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }
}
