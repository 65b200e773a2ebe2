//! # Plane
//!
//! Oriented plane `normal · p = w` with point classification.

use config::constants::{EPSILON, PLANE_EPSILON};
use glam::DVec3;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Side of a plane a point or polygon lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Within `PLANE_EPSILON` of the plane.
    Coplanar,
    /// Positive side.
    Front,
    /// Negative side.
    Back,
    /// Polygon with vertices on both sides.
    Spanning,
}

impl Side {
    /// Combine the sides of two vertices of the same polygon.
    pub fn combine(self, other: Side) -> Side {
        match (self, other) {
            (Side::Coplanar, side) | (side, Side::Coplanar) => side,
            (a, b) if a == b => a,
            _ => Side::Spanning,
        }
    }
}

// =============================================================================
// PLANE
// =============================================================================

/// Plane with unit normal; the front side is where the normal points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: DVec3,
    w: f64,
}

impl Plane {
    /// Plane through three points, counter-clockwise seen from the front.
    ///
    /// Returns `None` for collinear points.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a);
        let length = normal.length();
        if length < EPSILON {
            return None;
        }
        let normal = normal / length;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Unit normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Signed distance of `point`; positive in front.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Side of the plane `point` lies on.
    pub fn classify(&self, point: DVec3) -> Side {
        let distance = self.signed_distance(point);
        if distance > PLANE_EPSILON {
            Side::Front
        } else if distance < -PLANE_EPSILON {
            Side::Back
        } else {
            Side::Coplanar
        }
    }

    /// The same plane facing the other way.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            w: -self.w,
        }
    }
}
