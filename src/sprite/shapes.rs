//! Sprite generators for simple primitives.

use super::Sprite;
use rustc_hash::FxHashSet;

/// A line between two pixels (both inclusive), using Bresenham's algorithm.
pub fn line(x1: u32, y1: u32, x2: u32, y2: u32) -> Sprite {
    let (mut x, mut y) = (x1 as i64, y1 as i64);
    let (x2, y2) = (x2 as i64, y2 as i64);

    let dx = (x2 - x).abs();
    let dy = (y2 - y).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let sy = if y < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut sprite = Sprite::new();
    loop {
        sprite.insert(x as u32, y as u32);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    sprite
}

/// A solid `w × h` block with its top-left pixel at `(x, y)`.
///
/// Pixels beyond `u32::MAX` are clipped.
pub fn filled_rect(x: u32, y: u32, w: u32, h: u32) -> Sprite {
    let mut sprite = Sprite::new();
    if w == 0 || h == 0 {
        return sprite;
    }
    for row in y..=y.saturating_add(h - 1) {
        for col in x..=x.saturating_add(w - 1) {
            sprite.insert(col, row);
        }
    }
    sprite
}

/// The one pixel wide outline of a `w × h` rectangle with its top-left pixel at `(x, y)`.
///
/// Sides beyond `u32::MAX` are clipped.
pub fn rect(x: u32, y: u32, w: u32, h: u32) -> Sprite {
    let mut sprite = Sprite::new();
    if w == 0 || h == 0 {
        return sprite;
    }
    let (right, bottom) = (x.saturating_add(w - 1), y.saturating_add(h - 1));
    for row in y..=bottom {
        if row == y || row == bottom {
            sprite.merge(&line(x, row, right, row));
        } else {
            sprite.insert(x, row);
            sprite.insert(right, row);
        }
    }
    sprite
}

/// The outline of a circle of radius `r` whose bounding box starts at `(x, y)`,
/// so its center is the pixel `(x + r, y + r)`. Pixels beyond `u32::MAX` are dropped.
pub fn circle(x: u32, y: u32, r: u32) -> Sprite {
    let radius = r as f32;
    let mut seen = FxHashSet::default();
    let mut sprite = Sprite::new();

    // Sample in tenth-of-a-degree steps, large radii still get a closed outline.
    for step in 0..3600 {
        let angle = (step as f32 * 0.1).to_radians();
        let dx = (radius * angle.cos()).round() as i64;
        let dy = (radius * angle.sin()).round() as i64;
        if seen.insert((dx, dy)) {
            let px = u32::try_from(x as i64 + r as i64 + dx);
            let py = u32::try_from(y as i64 + r as i64 + dy);
            if let (Ok(px), Ok(py)) = (px, py) {
                sprite.insert(px, py);
            }
        }
    }
    sprite
}
