//! Separating Axis Theorem tests between convex polygons and between
//! bodies made of several convex pieces.

use crate::collision::intersection::IntersectionData;
use crate::math::vec2::Vec2;
use crate::shapes::Polygon;

/// Stateless narrow-phase tester.
///
/// Every method is a pure function of its arguments, so a single tester
/// can be shared freely between threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollisionTester;

impl CollisionTester {
    pub fn new() -> Self {
        CollisionTester
    }

    /// Tests two composite bodies against each other.
    ///
    /// Every `(a, b)` pair is tested with [`test_polygons`](Self::test_polygons).
    /// The colliding pair with the smallest distance wins; on an exact tie
    /// the first pair found is kept.
    pub fn test_bodies(&self, body_a: &[Polygon], body_b: &[Polygon]) -> Option<IntersectionData> {
        let mut best: Option<IntersectionData> = None;

        for polygon_a in body_a {
            for polygon_b in body_b {
                if let Some(data) = self.test_polygons(polygon_a, polygon_b) {
                    let shallower = best.map_or(true, |current| data.distance < current.distance);
                    if shallower {
                        best = Some(data);
                    }
                }
            }
        }
        best
    }

    /// Tests two convex polygons.
    ///
    /// Axes are taken from `polygon_a` first, then `polygon_b`, in stored
    /// order. The first axis with disjoint projections ends the test with
    /// `None`. Otherwise the axis with the smallest overlap is returned;
    /// ties keep the earlier axis.
    pub fn test_polygons(&self, polygon_a: &Polygon, polygon_b: &Polygon) -> Option<IntersectionData> {
        let vertices_a = polygon_a.vertices();
        let vertices_b = polygon_b.vertices();
        let mut result = IntersectionData::default();

        let axes = polygon_a.normals().iter().chain(polygon_b.normals());
        for &axis in axes {
            let (min_a, max_a) = Self::project(vertices_a, axis);
            let (min_b, max_b) = Self::project(vertices_b, axis);

            if min_a > max_b || min_b > max_a {
                return None;
            }

            let mut normal = axis;
            let mut mtv = max_a.min(max_b) - min_a.max(min_b);

            // One interval nested inside the other: the raw overlap would
            // leave the inner shape still overlapping, so push it out past
            // the nearer end of the outer one.
            let contained = (min_a > min_b && max_a < max_b) || (min_b > min_a && max_b < max_a);
            if contained {
                let to_min = (min_a - min_b).abs();
                let to_max = (max_a - max_b).abs();

                if to_min < to_max {
                    mtv += to_min;
                    normal = -normal;
                } else {
                    mtv += to_max;
                }
            }

            if mtv < result.distance {
                result = IntersectionData::new(normal, mtv);
            }
        }

        Some(result)
    }

    /// Projects `vertices` onto `axis`, returning `(min, max)` of the dot products.
    pub fn project(vertices: &[Vec2], axis: Vec2) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for &vertex in vertices {
            let projection = axis.dot(vertex);
            min = min.min(projection);
            max = max.max(projection);
        }
        (min, max)
    }
}
