pub mod shapes;

use crate::{Pixel, PixelMetrics, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One on-pixel of a sprite, as read from or written to JSON.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
pub struct SpritePixel {
    pub x: u32,
    pub y: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Pixel>,
}

impl SpritePixel {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y, color: None }
    }

    pub fn colored(x: u32, y: u32, color: Pixel) -> Self {
        Self {
            x,
            y,
            color: Some(color),
        }
    }
}

/// A sparse bitmap of logical pixels, each optionally carrying a color.
///
/// Positions are unique. Inserting a position twice keeps the pixel in place and
/// replaces its color. Insertion order is preserved for iteration and output.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
#[serde(from = "Vec<SpritePixel>", into = "Vec<SpritePixel>")]
pub struct Sprite {
    pixels: IndexMap<(u32, u32), Option<Pixel>>,
}

impl From<Vec<SpritePixel>> for Sprite {
    fn from(pixels: Vec<SpritePixel>) -> Self {
        pixels.into_iter().collect()
    }
}

impl From<Sprite> for Vec<SpritePixel> {
    fn from(sprite: Sprite) -> Self {
        sprite.iter().collect()
    }
}

impl FromIterator<SpritePixel> for Sprite {
    fn from_iter<I: IntoIterator<Item = SpritePixel>>(iter: I) -> Self {
        let mut sprite = Sprite::new();
        for p in iter {
            sprite.insert_colored(p.x, p.y, p.color);
        }
        sprite
    }
}

impl FromIterator<(u32, u32)> for Sprite {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(x, y)| SpritePixel::new(x, y))
            .collect()
    }
}

impl Sprite {
    pub fn new() -> Self {
        Self {
            pixels: IndexMap::new(),
        }
    }

    /// Builds an uncolored sprite from `(x, y)` pairs.
    pub fn from_coords(coords: &[(u32, u32)]) -> Self {
        coords.iter().copied().collect()
    }

    /// Builds a sprite from `(x, y, color)` records.
    pub fn from_colored(pixels: &[(u32, u32, Option<Pixel>)]) -> Self {
        pixels
            .iter()
            .map(|&(x, y, color)| SpritePixel { x, y, color })
            .collect()
    }

    /// Parses ASCII art. Every character other than `.` and space is an on-pixel.
    pub fn from_ascii(art: &str) -> Self {
        let mut sprite = Sprite::new();
        for (y, line) in art.lines().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                if ch != '.' && ch != ' ' {
                    sprite.insert(x as u32, y as u32);
                }
            }
        }
        sprite
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Loads a sprite from disk: `.json` files as pixel records, anything else as ASCII art.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Sprite::from_json(&contents)
        } else {
            Ok(Sprite::from_ascii(&contents))
        }
    }

    pub fn insert(&mut self, x: u32, y: u32) {
        self.insert_colored(x, y, None);
    }

    pub fn insert_colored(&mut self, x: u32, y: u32, color: Option<Pixel>) {
        self.pixels.insert((x, y), color);
    }

    /// Sets the same color on every pixel using the builder pattern.
    pub fn with_color(mut self, color: Pixel) -> Self {
        for c in self.pixels.values_mut() {
            *c = Some(color);
        }
        self
    }

    /// Adds all pixels of `other`. Colors of `other` win on overlap.
    pub fn merge(&mut self, other: &Sprite) {
        for p in other.iter() {
            self.insert_colored(p.x, p.y, p.color);
        }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.pixels.contains_key(&(x, y))
    }

    pub fn color(&self, x: u32, y: u32) -> Option<Pixel> {
        self.pixels.get(&(x, y)).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SpritePixel> + '_ {
        self.pixels
            .iter()
            .map(|(&(x, y), &color)| SpritePixel { x, y, color })
    }

    /// Width in logical pixels (`max x + 1`). `None` for an empty sprite.
    ///
    /// Measured in 64 bits, a pixel at `u32::MAX` gives a width of `2^32`.
    pub fn width(&self) -> Option<u64> {
        self.pixels.keys().map(|&(x, _)| x as u64 + 1).max()
    }

    /// Height in logical pixels (`max y + 1`). `None` for an empty sprite.
    pub fn height(&self) -> Option<u64> {
        self.pixels.keys().map(|&(_, y)| y as u64 + 1).max()
    }

    pub fn dimensions(&self) -> Option<(u64, u64)> {
        Some((self.width()?, self.height()?))
    }

    /// Visible render-space width, without a trailing margin.
    pub fn render_width(&self, metrics: &PixelMetrics) -> Option<f32> {
        self.width()
            .map(|w| metrics.to_render_scale_trimmed(w as f32))
    }

    /// Visible render-space height, without a trailing margin.
    pub fn render_height(&self, metrics: &PixelMetrics) -> Option<f32> {
        self.height()
            .map(|h| metrics.to_render_scale_trimmed(h as f32))
    }

    /// Returns a copy moved horizontally by `n` pixels. Pixels pushed below zero are dropped.
    pub fn shifted_x(&self, n: i32) -> Sprite {
        self.shifted(n, 0)
    }

    /// Returns a copy moved vertically by `n` pixels. Pixels pushed below zero are dropped.
    pub fn shifted_y(&self, n: i32) -> Sprite {
        self.shifted(0, n)
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Sprite {
        self.iter()
            .filter_map(|p| {
                Some(SpritePixel {
                    x: p.x.checked_add_signed(dx)?,
                    y: p.y.checked_add_signed(dy)?,
                    color: p.color,
                })
            })
            .collect()
    }
}
