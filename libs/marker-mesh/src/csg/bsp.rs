//! # BSP Tree
//!
//! Binary space partitioning tree over convex polygons, the classic csg.js
//! formulation.
//!
//! ## Operations
//!
//! - `build`: insert polygons, splitting them along node planes
//! - `clip_to`: remove the parts of this tree's polygons inside another tree
//! - `invert`: swap solid and empty space
//! - `all_polygons`: collect the surviving polygons
//!
//! Recursion goes through `stacker::maybe_grow`, so deep trees extend the
//! stack instead of overflowing it.

use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;

use super::plane::Plane;
use super::polygon::{Polygon, SplitParts};

/// A node of the BSP tree.
///
/// The back side of a node without a back child is solid, the front side of
/// a node without a front child is empty.
#[derive(Debug, Default)]
pub(crate) struct BspNode {
    plane: Option<Plane>,
    polygons: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Tree holding `polygons`.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::default();
        node.build(polygons);
        node
    }

    /// Insert polygons into the tree.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || self.build_inner(polygons));
    }

    fn build_inner(&mut self, polygons: Vec<Polygon>) {
        let Some(first) = polygons.first() else {
            return;
        };
        let plane = *self.plane.get_or_insert(*first.plane());

        let mut parts = SplitParts::default();
        for polygon in polygons {
            polygon.split(&plane, &mut parts);
        }
        self.polygons.append(&mut parts.coplanar_front);
        self.polygons.append(&mut parts.coplanar_back);

        if !parts.front.is_empty() {
            self.front.get_or_insert_with(Box::default).build(parts.front);
        }
        if !parts.back.is_empty() {
            self.back.get_or_insert_with(Box::default).build(parts.back);
        }
    }

    /// Swap solid and empty space.
    pub fn invert(&mut self) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            for polygon in &mut self.polygons {
                polygon.flip();
            }
            self.plane = self.plane.map(|plane| plane.flipped());
            if let Some(front) = self.front.as_mut() {
                front.invert();
            }
            if let Some(back) = self.back.as_mut() {
                back.invert();
            }
            std::mem::swap(&mut self.front, &mut self.back);
        });
    }

    /// Remove the parts of `polygons` inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let Some(plane) = self.plane else {
                return polygons;
            };

            let mut parts = SplitParts::default();
            for polygon in polygons {
                polygon.split(&plane, &mut parts);
            }
            let mut front = parts.front;
            front.append(&mut parts.coplanar_front);
            let mut back = parts.back;
            back.append(&mut parts.coplanar_back);

            let mut kept = match &self.front {
                Some(node) => node.clip_polygons(front),
                None => front,
            };
            if let Some(node) = &self.back {
                kept.extend(node.clip_polygons(back));
            }
            kept
        })
    }

    /// Remove the parts of this tree's polygons inside `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
            if let Some(front) = self.front.as_mut() {
                front.clip_to(other);
            }
            if let Some(back) = self.back.as_mut() {
                back.clip_to(other);
            }
        });
    }

    /// Every polygon stored in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.extend(node.polygons.iter().cloned());
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }
        out
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        // Unlink children iteratively; a recursive drop can exhaust the stack.
        let mut stack: Vec<Box<BspNode>> = self.front.take().into_iter().chain(self.back.take()).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
    }
}
