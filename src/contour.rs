//! Silhouette tracing of a sprite into a closed render-space polygon.
//!
//! The outline is built in two passes over a dense occupancy grid. The left
//! pass walks rows top to bottom through the top-left corner of the leftmost
//! pixel of every row, the right pass walks rows bottom to top through the
//! bottom-right corner of the rightmost pixel. Where the silhouette widens the
//! outline takes the diagonal between rows, where it narrows an orthogonal
//! staircase corner is inserted. Only the outermost pixels of a row matter, so
//! separate blobs sharing a row are bridged into one outline.

use crate::{PixelMetrics, Polygon, Result, Sprite, SynthError, SynthSettings};
use vek::Vec2;

/// Dense row-major occupancy of a sprite's bounding box, anchored at `(0, 0)`.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Rasterizes the sprite. `Ok(None)` if the sprite is empty, an error if its
    /// bounding box exceeds the limits of `settings`.
    pub fn from_sprite(sprite: &Sprite, settings: &SynthSettings) -> Result<Option<Self>> {
        let Some((width, height)) = sprite.dimensions() else {
            return Ok(None);
        };
        settings.check_bounds(width, height)?;
        let len = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .ok_or(SynthError::OversizedSprite {
                width,
                height,
                max_width: settings.max_width,
                max_height: settings.max_height,
            })?;

        // Both sides are within the u32 limits here.
        let (width, height) = (width as u32, height as u32);
        let mut cells = vec![false; len];
        for p in sprite.iter() {
            cells[p.y as usize * width as usize + p.x as usize] = true;
        }
        Ok(Some(Self {
            width,
            height,
            cells,
        }))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_set(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.cells[self.index(x, y)]
    }

    fn row(&self, row: u32) -> &[bool] {
        let start = self.index(0, row);
        &self.cells[start..start + self.width as usize]
    }

    /// Column of the leftmost occupied cell in a row.
    pub fn first_in_row(&self, row: u32) -> Option<u32> {
        self.row(row).iter().position(|&c| c).map(|x| x as u32)
    }

    /// Column of the rightmost occupied cell in a row.
    pub fn last_in_row(&self, row: u32) -> Option<u32> {
        self.row(row).iter().rposition(|&c| c).map(|x| x as u32)
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Accumulates outline points, merging collinear runs and inserting staircase corners.
#[derive(Default)]
struct Chain {
    points: Vec<Vec2<f32>>,
    slope: Option<f32>,
}

impl Chain {
    fn advance(&mut self, candidate: Vec2<f32>) {
        let Some(&prev) = self.points.last() else {
            self.points.push(candidate);
            return;
        };
        if prev == candidate {
            return;
        }

        let slope = (candidate.y - prev.y) / (candidate.x - prev.x);
        if slope < 0.0 || slope.is_infinite() {
            // Widening or straight: connect directly, folding runs of equal slope.
            if self.slope == Some(slope) && self.points.len() > 1 {
                self.points.pop();
            }
        } else {
            // Narrowing: step down (or up) first, then across.
            let corner = Vec2::new(prev.x, candidate.y);
            if corner != prev {
                self.points.push(corner);
            }
        }
        self.points.push(candidate);
        self.slope = Some(slope);
    }
}

/// Traces the outline of the grid in render space, wound clockwise and
/// centered on the sprite's logical center. `None` for degenerate outlines.
pub fn trace(grid: &OccupancyGrid, metrics: &PixelMetrics) -> Option<Polygon> {
    let mut chain = Chain::default();

    let mut last_left = None;
    for row in 0..grid.height() {
        if let Some(col) = grid.first_in_row(row) {
            chain.advance(metrics.cell_corner(col, row));
            last_left = Some((col, row));
        }
    }
    let (col, row) = last_left?;
    // Bottom-left corner of the lowest row closes the left side.
    chain.advance(metrics.cell_corner(col, row + 1));

    let mut first_right = None;
    for row in (0..grid.height()).rev() {
        if let Some(col) = grid.last_in_row(row) {
            chain.advance(metrics.cell_corner(col + 1, row + 1));
            first_right = Some((col, row));
        }
    }
    if let Some((col, row)) = first_right {
        // Top-right corner of the highest row.
        chain.advance(metrics.cell_corner(col + 1, row));
    }

    let mut polygon = Polygon::new(chain.points);
    polygon.reverse();
    polygon.simplify();
    if polygon.len() < 3 {
        return None;
    }

    let center = metrics.to_render_point(Vec2::new(
        grid.width() as f32 / 2.0,
        grid.height() as f32 / 2.0,
    ));
    polygon.translate(-center);

    log::debug!(
        "Traced {}x{} sprite into {} vertices",
        grid.width(),
        grid.height(),
        polygon.len()
    );
    Some(polygon)
}

/// Rasterizes and traces a sprite in one go, with the scheme and limits of `settings`.
pub fn trace_sprite(sprite: &Sprite, settings: &SynthSettings) -> Result<Option<Polygon>> {
    let Some(grid) = OccupancyGrid::from_sprite(sprite, settings)? else {
        return Ok(None);
    };
    Ok(trace(&grid, &settings.metrics()))
}
