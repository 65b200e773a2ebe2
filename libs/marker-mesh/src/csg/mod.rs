//! # Constructive Solid Geometry
//!
//! Solids as convex polygon soups with BSP boolean operations.
//!
//! ## Algorithm
//!
//! - Union: `a.clip_to(b); b.clip_to(a); b.invert(); b.clip_to(a); b.invert(); a.build(b)`
//! - Difference: `a.invert()`, then union with `b`, then `a.invert()` again
//!
//! Splits can leave T-junctions between neighbouring faces. The result is
//! still a closed, correctly oriented surface, which is what STL slicers need.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use marker_mesh::Solid;
//!
//! let plate = Solid::cuboid(DVec3::ZERO, DVec3::new(10.0, 10.0, 2.0)).unwrap();
//! let hole = Solid::cuboid(DVec3::new(4.0, 4.0, 1.0), DVec3::new(6.0, 6.0, 3.0)).unwrap();
//! let result = plate.difference(&hole);
//! assert!(result.polygon_count() > plate.polygon_count());
//! ```

mod bsp;
pub mod plane;
pub mod polygon;

use glam::DVec3;
use rayon::prelude::*;
use tracing::debug;

use bsp::BspNode;
use polygon::Polygon;

// =============================================================================
// SOLID
// =============================================================================

/// Closed polyhedral solid made of convex, outward-facing polygons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    polygons: Vec<Polygon>,
}

impl Solid {
    /// Solid with no volume.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Solid from its boundary polygons.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Boundary polygons.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of boundary polygons.
    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// True if the solid has no boundary.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Copy of the solid moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            polygons: self.polygons.iter().map(|p| p.translated(offset)).collect(),
        }
    }

    /// Space inside `self` or `other`.
    #[must_use]
    pub fn union(&self, other: &Solid) -> Solid {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut a = BspNode::new(self.polygons.clone());
        let mut b = BspNode::new(other.polygons.clone());
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());
        Solid::from_polygons(a.all_polygons())
    }

    /// Space inside `self` but not inside `other`.
    #[must_use]
    pub fn difference(&self, other: &Solid) -> Solid {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }

        let mut a = BspNode::new(self.polygons.clone());
        let mut b = BspNode::new(other.polygons.clone());
        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());
        a.invert();
        Solid::from_polygons(a.all_polygons())
    }
}

// =============================================================================
// N-ARY OPERATIONS
// =============================================================================

/// Union of many solids, reduced pairwise in parallel.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use marker_mesh::{union_all, Solid};
///
/// let cubes = (0..4)
///     .map(|i| {
///         let x = f64::from(i) * 3.0;
///         Solid::cuboid(DVec3::new(x, 0.0, 0.0), DVec3::new(x + 1.0, 1.0, 1.0)).unwrap()
///     })
///     .collect();
/// assert_eq!(union_all(cubes).polygon_count(), 24);
/// ```
pub fn union_all(solids: Vec<Solid>) -> Solid {
    let count = solids.len();
    let result = solids
        .into_par_iter()
        .reduce(Solid::empty, |a, b| a.union(&b));
    debug!(inputs = count, polygons = result.polygon_count(), "union_all");
    result
}

/// `base` minus every solid in `tools`.
///
/// The tools are merged with [`union_all`] first, so the base is split only once.
pub fn difference_all(base: &Solid, tools: Vec<Solid>) -> Solid {
    if tools.is_empty() {
        return base.clone();
    }
    base.difference(&union_all(tools))
}

// =============================================================================
// TESTS
// =============================================================================
