//! Triangle geometry: point containment and vertex overlap

use vanguard_core::{Transform, Vec3};

/// Twice the signed area of `(a, b, c)` projected onto the XY plane
fn edge_sign(p: Vec3, a: Vec3, b: Vec3) -> f32 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

/// Same-side test in the XY plane. Points on an edge count as inside; a
/// zero-area triangle contains nothing.
pub fn point_in_triangle(p: Vec3, a: Vec3, b: Vec3, c: Vec3) -> bool {
    if edge_sign(a, b, c).abs() <= f32::EPSILON {
        return false;
    }
    let d1 = edge_sign(p, a, b);
    let d2 = edge_sign(p, b, c);
    let d3 = edge_sign(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub verts: [Vec3; 3],
}

impl Default for Triangle {
    fn default() -> Self {
        Self::SHIP
    }
}

impl Triangle {
    /// Default local-space shape: bottom-left, bottom-right, top (screen Y down)
    pub const SHIP: Self = Self {
        verts: [
            Vec3::new(-20.0, 30.0, 0.0),
            Vec3::new(20.0, 30.0, 0.0),
            Vec3::new(0.0, -30.0, 0.0),
        ],
    };

    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { verts: [a, b, c] }
    }

    pub fn centroid(&self) -> Vec3 {
        (self.verts[0] + self.verts[1] + self.verts[2]) / 3.0
    }

    /// Width and height from the absolute vertex extents:
    /// `|v0.x| + |v1.x|` by `|v0.y| + |v2.y|`
    pub fn extents(&self) -> (f32, f32) {
        let [v0, v1, v2] = self.verts;
        (v0.x.abs() + v1.x.abs(), v0.y.abs() + v2.y.abs())
    }

    /// Map every vertex through `transform` into world space
    pub fn transformed(&self, transform: &Transform) -> Self {
        let matrix = transform.to_matrix();
        Self {
            verts: self.verts.map(|v| matrix.transform_point3(v)),
        }
    }

    pub fn contains(&self, p: Vec3) -> bool {
        let [a, b, c] = self.verts;
        point_in_triangle(p, a, b, c)
    }

    /// True when a vertex of either triangle lies inside the other
    pub fn overlaps(&self, other: &Triangle) -> bool {
        self.verts
            .iter()
            .zip(other.verts.iter())
            .any(|(mine, theirs)| other.contains(*mine) || self.contains(*theirs))
    }
}
