use crate::{BBox, Polygon};
use earcutr::earcut;
use serde::{Deserialize, Serialize};
use vek::Vec2;

/// A triangulated collision mesh.
///
/// `vertices` is the clockwise outline it was built from, `indices` are triangles
/// into it, each wound clockwise as well.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct Collider {
    pub vertices: Vec<Vec2<f32>>,
    pub indices: Vec<(usize, usize, usize)>,
}

impl Collider {
    /// Triangulates a simple polygon using earcutr. `None` if it cannot be triangulated.
    pub fn from_polygon(polygon: &Polygon) -> Option<Collider> {
        if polygon.len() < 3 {
            return None;
        }

        // Flatten the vertices for earcutr
        let flattened_vertices: Vec<f64> = polygon
            .points
            .iter()
            .flat_map(|v| [v.x as f64, v.y as f64])
            .collect();

        // Sprite outlines never have holes
        let holes: Vec<usize> = Vec::new();

        let indices = match earcut(&flattened_vertices, &holes, 2) {
            Ok(indices) if !indices.is_empty() => indices,
            _ => {
                log::warn!(
                    "Failed to triangulate polygon with {} vertices",
                    polygon.len()
                );
                return None;
            }
        };

        let vertices = polygon.points.clone();
        let indices: Vec<(usize, usize, usize)> = indices
            .chunks_exact(3)
            .map(|chunk| {
                let (a, b, c) = (chunk[0], chunk[1], chunk[2]);
                if triangle_signed_area(vertices[a], vertices[b], vertices[c]) < 0.0 {
                    (a, c, b)
                } else {
                    (a, b, c)
                }
            })
            .collect();

        log::debug!(
            "Triangulated {} vertices into {} triangles",
            vertices.len(),
            indices.len()
        );
        Some(Collider { vertices, indices })
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// The triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec2<f32>; 3]> + '_ {
        self.indices
            .iter()
            .map(|&(a, b, c)| [self.vertices[a], self.vertices[b], self.vertices[c]])
    }

    /// Total area covered by the triangles.
    pub fn area(&self) -> f32 {
        self.triangles()
            .fold(0.0, |acc, [a, b, c]| acc + triangle_signed_area(a, b, c).abs())
    }

    /// The outline the mesh was built from.
    pub fn outline(&self) -> Polygon {
        Polygon::new(self.vertices.clone())
    }

    pub fn bbox(&self) -> Option<BBox> {
        BBox::from_points(&self.vertices)
    }
}

/// Positive for clockwise triangles in y-down space.
fn triangle_signed_area(a: Vec2<f32>, b: Vec2<f32>, c: Vec2<f32>) -> f32 {
    0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y))
}
