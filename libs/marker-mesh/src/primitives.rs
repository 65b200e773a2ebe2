//! # Primitives
//!
//! Extruded solids: prisms over convex outlines, cuboids and cylinders.
//!
//! All primitives are closed and outward-facing. Outlines may be given in
//! either winding; clockwise outlines are reversed before extrusion.

use std::f64::consts::TAU;

use config::constants::{circle_segments, EPSILON, MIN_SEGMENTS};
use glam::{DVec2, DVec3};

use crate::csg::polygon::Polygon;
use crate::csg::Solid;
use crate::error::{MeshError, MeshResult};

/// Number of segments for a circle of `radius` mm.
///
/// Follows OpenSCAD's `$fa`/`$fs` rule with the crate defaults.
///
/// ## Example
///
/// ```rust
/// use marker_mesh::segments_for_radius;
///
/// assert_eq!(segments_for_radius(5.15), 60);
/// assert_eq!(segments_for_radius(0.1), 3);
/// ```
pub fn segments_for_radius(radius: f64) -> u32 {
    circle_segments(radius)
}

impl Solid {
    /// Straight extrusion of a convex outline between `z0` and `z1`.
    ///
    /// ## Parameters
    ///
    /// - `outline`: convex polygon in the XY plane, at least three points
    /// - `z0`, `z1`: bottom and top heights, `z0 < z1`
    pub fn prism(outline: &[DVec2], z0: f64, z1: f64) -> MeshResult<Solid> {
        if outline.len() < 3 {
            return Err(MeshError::invalid_primitive(
                "prism",
                format!("outline needs at least 3 points, got {}", outline.len()),
            ));
        }
        if !(z1 - z0 > EPSILON) {
            return Err(MeshError::invalid_primitive("prism", format!("empty height range {z0}..{z1}")));
        }
        let area = signed_area(outline);
        if area.abs() < EPSILON {
            return Err(MeshError::invalid_primitive("prism", "outline has no area"));
        }

        let mut ring: Vec<DVec2> = outline.to_vec();
        if area < 0.0 {
            ring.reverse();
        }

        let at = |p: DVec2, z: f64| DVec3::new(p.x, p.y, z);
        let mut polygons = Vec::with_capacity(ring.len() + 2);
        polygons.extend(Polygon::new(ring.iter().rev().map(|p| at(*p, z0)).collect()));
        polygons.extend(Polygon::new(ring.iter().map(|p| at(*p, z1)).collect()));
        for (i, &a) in ring.iter().enumerate() {
            let b = ring[(i + 1) % ring.len()];
            polygons.extend(Polygon::new(vec![at(a, z0), at(b, z0), at(b, z1), at(a, z1)]));
        }
        Ok(Solid::from_polygons(polygons))
    }

    /// Axis-aligned box between two corners.
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use marker_mesh::Solid;
    ///
    /// let cube = Solid::cuboid(DVec3::ZERO, DVec3::ONE).unwrap();
    /// assert_eq!(cube.polygon_count(), 6);
    /// ```
    pub fn cuboid(min: DVec3, max: DVec3) -> MeshResult<Solid> {
        if !(max.cmpgt(min).all()) {
            return Err(MeshError::invalid_primitive("cuboid", format!("corners {min} and {max} enclose no volume")));
        }
        let outline = [
            DVec2::new(min.x, min.y),
            DVec2::new(max.x, min.y),
            DVec2::new(max.x, max.y),
            DVec2::new(min.x, max.y),
        ];
        Self::prism(&outline, min.z, max.z)
    }

    /// Vertical cylinder approximated by a regular polygon.
    ///
    /// ## Parameters
    ///
    /// - `center`: axis position in the XY plane
    /// - `radius`: circumradius of the polygon
    /// - `z0`, `z1`: bottom and top heights
    /// - `segments`: number of sides, at least 3
    pub fn cylinder(center: DVec2, radius: f64, z0: f64, z1: f64, segments: u32) -> MeshResult<Solid> {
        if !(radius > EPSILON) {
            return Err(MeshError::invalid_primitive("cylinder", format!("radius must be positive, got {radius}")));
        }
        if segments < MIN_SEGMENTS {
            return Err(MeshError::invalid_primitive(
                "cylinder",
                format!("needs at least {MIN_SEGMENTS} segments, got {segments}"),
            ));
        }
        let outline: Vec<DVec2> = (0..segments)
            .map(|i| {
                let angle = TAU * f64::from(i) / f64::from(segments);
                center + radius * DVec2::new(angle.cos(), angle.sin())
            })
            .collect();
        Self::prism(&outline, z0, z1)
    }
}

/// Shoelace area; positive for counter-clockwise outlines.
fn signed_area(outline: &[DVec2]) -> f64 {
    let sum: f64 = outline
        .iter()
        .zip(outline.iter().cycle().skip(1))
        .map(|(a, b)| a.perp_dot(*b))
        .sum();
    sum / 2.0
}
