//! # Polygon
//!
//! Convex planar polygon, the face primitive of a [`Solid`](super::Solid).

use glam::DVec3;

use super::plane::{Plane, Side};

/// Convex polygon with counter-clockwise vertices seen from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<DVec3>,
    plane: Plane,
}

/// Destination lists for [`Polygon::split`].
#[derive(Debug, Default)]
pub(crate) struct SplitParts {
    pub coplanar_front: Vec<Polygon>,
    pub coplanar_back: Vec<Polygon>,
    pub front: Vec<Polygon>,
    pub back: Vec<Polygon>,
}

impl Polygon {
    /// Polygon from at least three vertices; `None` when degenerate.
    ///
    /// The plane is taken from the first three vertices.
    pub fn new(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Supporting plane.
    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Outward unit normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.plane.normal()
    }

    /// Reverse winding and plane orientation.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flipped();
    }

    /// Move every vertex by `offset`.
    #[must_use]
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| *v + offset).collect(),
            plane: Plane::from_points(
                self.vertices[0] + offset,
                self.vertices[1] + offset,
                self.vertices[2] + offset,
            )
            .unwrap_or(self.plane),
        }
    }

    /// Sort this polygon into `parts` relative to `plane`, splitting it when
    /// it spans the plane.
    pub(crate) fn split(self, plane: &Plane, parts: &mut SplitParts) {
        let sides: Vec<Side> = self.vertices.iter().map(|v| plane.classify(*v)).collect();
        let side = sides.iter().fold(Side::Coplanar, |acc, s| acc.combine(*s));

        match side {
            Side::Coplanar => {
                if plane.normal().dot(self.normal()) > 0.0 {
                    parts.coplanar_front.push(self);
                } else {
                    parts.coplanar_back.push(self);
                }
            }
            Side::Front => parts.front.push(self),
            Side::Back => parts.back.push(self),
            Side::Spanning => {
                let count = self.vertices.len();
                let mut front = Vec::with_capacity(count + 1);
                let mut back = Vec::with_capacity(count + 1);

                for i in 0..count {
                    let j = (i + 1) % count;
                    let (si, sj) = (sides[i], sides[j]);
                    let (vi, vj) = (self.vertices[i], self.vertices[j]);

                    if si != Side::Back {
                        front.push(vi);
                    }
                    if si != Side::Front {
                        back.push(vi);
                    }
                    if matches!((si, sj), (Side::Front, Side::Back) | (Side::Back, Side::Front)) {
                        let t = plane.signed_distance(vi) / (plane.signed_distance(vi) - plane.signed_distance(vj));
                        let point = vi.lerp(vj, t);
                        front.push(point);
                        back.push(point);
                    }
                }

                // Split pieces keep the parent's plane; their first three
                // vertices may be nearly collinear.
                if front.len() >= 3 {
                    parts.front.push(Self {
                        vertices: front,
                        plane: self.plane,
                    });
                }
                if back.len() >= 3 {
                    parts.back.push(Self {
                        vertices: back,
                        plane: self.plane,
                    });
                }
            }
        }
    }
}
