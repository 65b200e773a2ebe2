//! # Mesh Data Structure
//!
//! Indexed triangle mesh produced from a [`Solid`] for export.

use std::collections::HashMap;

use config::constants::{EPSILON, VERTEX_WELD_EPSILON};
use glam::DVec3;

use crate::csg::Solid;

/// A triangle mesh with shared vertices.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use marker_mesh::{Mesh, Solid};
///
/// let cube = Solid::cuboid(DVec3::ZERO, DVec3::splat(2.0)).unwrap();
/// let mesh = Mesh::from_solid(&cube);
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert!((mesh.volume() - 8.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangulate the boundary of `solid`.
    ///
    /// Polygons are convex, so each one becomes a triangle fan. Corners
    /// closer than `VERTEX_WELD_EPSILON` are merged and triangles that
    /// collapse in the process are dropped.
    pub fn from_solid(solid: &Solid) -> Self {
        let mut mesh = Self::new();
        let mut welded: HashMap<[i64; 3], u32> = HashMap::new();

        for polygon in solid.polygons() {
            let indices: Vec<u32> = polygon
                .vertices()
                .iter()
                .map(|v| mesh.weld(&mut welded, *v))
                .collect();
            for i in 1..indices.len().saturating_sub(1) {
                mesh.push_triangle([indices[0], indices[i], indices[i + 1]]);
            }
        }
        mesh
    }

    fn weld(&mut self, welded: &mut HashMap<[i64; 3], u32>, position: DVec3) -> u32 {
        let key = (position / VERTEX_WELD_EPSILON).round().as_i64vec3().to_array();
        *welded.entry(key).or_insert_with(|| {
            let index = self.vertices.len() as u32;
            self.vertices.push(position);
            index
        })
    }

    fn push_triangle(&mut self, [a, b, c]: [u32; 3]) {
        if a == b || b == c || a == c {
            return;
        }
        let (pa, pb, pc) = (self.vertex(a), self.vertex(b), self.vertex(c));
        if (pb - pa).cross(pc - pa).length() < EPSILON {
            return;
        }
        self.triangles.push([a, b, c]);
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Corner positions of every triangle.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.triangles
            .iter()
            .map(|&[a, b, c]| [self.vertex(a), self.vertex(b), self.vertex(c)])
    }

    /// Axis-aligned bounding box as `(min, max)`, `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v))),
        )
    }

    /// Enclosed volume, positive for outward-facing triangles.
    pub fn volume(&self) -> f64 {
        self.triangle_positions()
            .map(|[a, b, c]| a.dot(b.cross(c)))
            .sum::<f64>()
            / 6.0
    }

    /// Move every vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube_mesh(min: DVec3, size: f64) -> Mesh {
        Mesh::from_solid(&Solid::cuboid(min, min + DVec3::splat(size)).unwrap())
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::from_solid(&Solid::empty());
        assert!(mesh.is_empty());
        assert!(mesh.bounds().is_none());
        assert_eq!(mesh.volume(), 0.0);
    }

    #[test]
    fn test_welding_shares_corners() {
        let mesh = cube_mesh(DVec3::ZERO, 1.0);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_bounds_and_translate() {
        let mut mesh = cube_mesh(DVec3::new(-1.0, -1.0, 0.0), 2.0);
        assert_eq!(mesh.bounds(), Some((DVec3::new(-1.0, -1.0, 0.0), DVec3::new(1.0, 1.0, 2.0))));
        mesh.translate(DVec3::Z);
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min.z, 1.0);
        assert_eq!(max.z, 3.0);
    }

    #[test]
    fn test_volume_is_translation_invariant() {
        let mut mesh = cube_mesh(DVec3::ZERO, 3.0);
        assert_relative_eq!(mesh.volume(), 27.0, epsilon = 1e-9);
        mesh.translate(DVec3::new(10.0, -4.0, 2.0));
        assert_relative_eq!(mesh.volume(), 27.0, epsilon = 1e-9);
    }
}
