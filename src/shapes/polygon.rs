use crate::error::{CollisionError, CollisionResult};
use crate::math::vec2::Vec2;

/// A convex polygon in world space with one precomputed axis per edge.
///
/// `normals()[k]` belongs to the edge running from `vertices()[k - 1]`
/// (wrapping) to `vertices()[k]`. The axes are computed once; translating
/// the polygon keeps every edge direction, so they stay valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    normals: Vec<Vec2>,
}

impl Polygon {
    /// Creates a polygon from vertices in a consistent winding order.
    ///
    /// Each edge axis is the edge direction with its components swapped and
    /// then normalized. Neither component is negated, so the axis is only
    /// perpendicular to axis-aligned and 45 degree edges. Collision results
    /// downstream depend on this exact formula.
    ///
    /// Returns an error when fewer than 3 vertices are given or an edge has
    /// zero length. Convexity is not checked.
    pub fn new(vertices: Vec<Vec2>) -> CollisionResult<Self> {
        let n = vertices.len();
        if n < 3 {
            return Err(CollisionError::TooFewVertices { count: n });
        }

        let mut normals = Vec::with_capacity(n);
        let mut i = n - 1;
        for j in 0..n {
            let axis = (vertices[j] - vertices[i]).swapped();
            let length = axis.magnitude();
            if length == 0.0 || !length.is_finite() {
                return Err(CollisionError::DegenerateEdge { index: j });
            }
            normals.push(axis / length);
            i = j;
        }

        Ok(Polygon { vertices, normals })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Vec2] {
        &self.normals
    }

    /// Translates every vertex by `step`. Normals are left untouched.
    pub fn translate(&mut self, step: Vec2) {
        for vertex in &mut self.vertices {
            *vertex += step;
        }
    }

    /// Average of the vertices. Handy for locating a body in a scene.
    pub fn center(&self) -> Vec2 {
        let sum = self
            .vertices
            .iter()
            .fold(Vec2::ZERO, |acc, &v| acc + v);
        sum / self.vertices.len() as f64
    }
}
