use crate::BBox;
use serde::{Deserialize, Serialize};
use vek::Vec2;

/// A closed polygon in render space. The last point connects back to the first.
///
/// Render space is y-down, so a clockwise polygon (as seen on screen) has a
/// positive signed area.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Polygon {
    pub points: Vec<Vec2<f32>>,
}

impl Polygon {
    pub fn new(points: Vec<Vec2<f32>>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All edges including the closing edge from the last point to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2<f32>, Vec2<f32>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace area, positive for clockwise winding in y-down space.
    pub fn signed_area(&self) -> f32 {
        0.5 * self
            .edges()
            .fold(0.0, |acc, (a, b)| acc + (a.x * b.y - b.x * a.y))
    }

    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn bbox(&self) -> Option<BBox> {
        BBox::from_points(&self.points)
    }

    pub fn translate(&mut self, offset: Vec2<f32>) {
        for p in &mut self.points {
            *p += offset;
        }
    }

    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Removes repeated points and points lying on the line through their neighbours.
    pub fn simplify(&mut self) {
        let mut out: Vec<Vec2<f32>> = Vec::with_capacity(self.points.len());
        for &p in &self.points {
            if out.last() == Some(&p) {
                continue;
            }
            while out.len() >= 2 && is_collinear(out[out.len() - 2], out[out.len() - 1], p) {
                out.pop();
            }
            out.push(p);
        }

        // The same check across the seam between the last and the first point.
        while out.len() >= 3 {
            let n = out.len();
            if out[n - 1] == out[0] || is_collinear(out[n - 2], out[n - 1], out[0]) {
                out.pop();
            } else if is_collinear(out[n - 1], out[0], out[1]) {
                out.remove(0);
            } else {
                break;
            }
        }

        self.points = out;
    }

    /// Ray casting point-in-polygon test.
    pub fn contains(&self, point: Vec2<f32>) -> bool {
        if self.points.len() < 3 {
            return false;
        }

        let mut inside = false;
        for (vi, vj) in self.edges() {
            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
        }
        inside
    }
}

/// True if `b` lies on the line through `a` and `c`, including a reversal at `b`.
fn is_collinear(a: Vec2<f32>, b: Vec2<f32>, c: Vec2<f32>) -> bool {
    let ab = b - a;
    let bc = c - b;
    let cross = ab.x * bc.y - ab.y * bc.x;
    cross.abs() <= 1e-6 * ab.magnitude() * bc.magnitude()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: f32) -> Polygon {
        // Clockwise on screen: right, down, left, up.
        Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(side, 0.0),
            Vec2::new(side, side),
            Vec2::new(0.0, side),
        ])
    }

    #[test]
    fn test_area_and_winding() {
        let mut poly = square(2.0);
        assert_eq!(poly.signed_area(), 4.0);
        assert!(poly.is_clockwise());

        poly.reverse();
        assert_eq!(poly.signed_area(), -4.0);
        assert!(!poly.is_clockwise());
        assert_eq!(poly.area(), 4.0);
    }

    #[test]
    fn test_edges_close_the_loop() {
        let poly = square(1.0);
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_simplify() {
        let mut poly = Polygon::new(vec![
            Vec2::new(0.0, 1.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ]);
        poly.simplify();
        assert_eq!(
            poly.points,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(2.0, 0.0),
                Vec2::new(2.0, 2.0),
                Vec2::new(0.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_simplify_degenerate() {
        let mut poly = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 2.0),
        ]);
        poly.simplify();
        assert!(poly.len() < 3);
    }

    #[test]
    fn test_contains() {
        let mut poly = square(10.0);
        assert!(poly.contains(Vec2::new(5.0, 5.0)));
        assert!(!poly.contains(Vec2::new(15.0, 5.0)));

        poly.translate(Vec2::new(-5.0, -5.0));
        assert!(poly.contains(Vec2::zero()));
        assert_eq!(poly.bbox().unwrap().center(), Vec2::zero());
    }
}
