//! Small geometric helpers shared by the feature derivation and the pose matcher.
//!
//! Landmark positions are plain `[f32; 3]` arrays at rest and converted to [`nalgebra`] types at
//! computation sites.

use nalgebra::{Point2, Point3, Vector3};

/// A 3D landmark position (x, y, z).
pub type Position = [f32; 3];

/// A 2D position, used for bounding-box corners.
pub type Position2 = [f32; 2];

/// Tolerance (in coordinate units) for the collinearity test in [`are_aligned`].
pub const ALIGNMENT_TOLERANCE: f32 = 1.0;

/// A coordinate axis, used as a coarse orientation proxy for fingers and hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the axis whose component has the greatest magnitude in `v`.
    ///
    /// Ties resolve to the earlier axis (X before Y before Z): the scan keeps the first maximum
    /// it encounters and only replaces it on a strictly greater magnitude.
    pub fn dominant(v: Vector3<f32>) -> Axis {
        let mut max = v.x.abs();
        let mut axis = Axis::X;
        for (component, candidate) in [(v.y.abs(), Axis::Y), (v.z.abs(), Axis::Z)] {
            if component > max {
                max = component;
                axis = candidate;
            }
        }
        axis
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Euclidean distance between two 3D positions.
pub fn distance(a: Position, b: Position) -> f32 {
    nalgebra::distance(&Point3::from(a), &Point3::from(b))
}

/// Euclidean distance between two 2D positions.
pub fn distance2d(a: Position2, b: Position2) -> f32 {
    nalgebra::distance(&Point2::from(a), &Point2::from(b))
}

/// Should two points be considered "close enough" to be in contact?
pub fn are_touching(a: Position, b: Position, threshold: f32) -> bool {
    distance(a, b) < threshold
}

/// Returns `true` if the three points are collinear within [`ALIGNMENT_TOLERANCE`].
///
/// Uses the degenerate-triangle test: with the three pairwise distances sorted ascending as
/// `d0 <= d1 <= d2`, the points lie on a line exactly when `d2 == d0 + d1`. This is the
/// straightness check for "is this finger segment straight".
pub fn are_aligned(a: Position, b: Position, c: Position) -> bool {
    let mut d = [distance(a, b), distance(a, c), distance(b, c)];
    d.sort_by(f32::total_cmp);
    (d[2] - (d[0] + d[1])).abs() < ALIGNMENT_TOLERANCE
}

/// Dominant axis of the direction `from` → `to`.
pub fn orientation(from: Position, to: Position) -> Axis {
    Axis::dominant(Point3::from(to) - Point3::from(from))
}
