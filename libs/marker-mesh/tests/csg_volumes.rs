//! Volume checks of boolean results through the full solid → mesh path.

use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use marker_mesh::{difference_all, union_all, Mesh, Solid};

fn cube(min: [f64; 3], size: f64) -> Solid {
    let min = DVec3::from_array(min);
    Solid::cuboid(min, min + DVec3::splat(size)).unwrap()
}

fn volume(solid: &Solid) -> f64 {
    Mesh::from_solid(solid).volume()
}

#[test]
fn test_union_overlapping_cubes() {
    let result = cube([0.0; 3], 2.0).union(&cube([1.0, 0.0, 0.0], 2.0));
    assert_relative_eq!(volume(&result), 12.0, epsilon = 1e-6);
}

#[test]
fn test_union_touching_cubes() {
    let result = cube([0.0; 3], 1.0).union(&cube([1.0, 0.0, 0.0], 1.0));
    assert_relative_eq!(volume(&result), 2.0, epsilon = 1e-6);
}

#[test]
fn test_difference_hollow_cube() {
    let result = cube([0.0; 3], 4.0).difference(&cube([1.0; 3], 2.0));
    assert_relative_eq!(volume(&result), 56.0, epsilon = 1e-6);
}

#[test]
fn test_difference_through_hole() {
    let plate = cube([0.0; 3], 4.0);
    let hole = Solid::cuboid(DVec3::new(1.0, 1.0, -1.0), DVec3::new(3.0, 3.0, 5.0)).unwrap();
    assert_relative_eq!(volume(&plate.difference(&hole)), 64.0 - 16.0, epsilon = 1e-6);
}

#[test]
fn test_difference_flush_pocket() {
    // Tool top face coplanar with the plate top face
    let plate = cube([0.0; 3], 4.0);
    let pocket = Solid::cuboid(DVec3::new(1.0, 1.0, 3.0), DVec3::new(2.0, 2.0, 4.0)).unwrap();
    assert_relative_eq!(volume(&plate.difference(&pocket)), 63.0, epsilon = 1e-6);
}

#[test]
fn test_difference_all_grid_of_pockets() {
    let plate = cube([0.0; 3], 10.0);
    let tools: Vec<Solid> = (0..3)
        .flat_map(|i| (0..3).map(move |j| (i, j)))
        .map(|(i, j)| {
            let x = 1.0 + 3.0 * f64::from(i);
            let y = 1.0 + 3.0 * f64::from(j);
            Solid::cuboid(DVec3::new(x, y, 9.0), DVec3::new(x + 2.0, y + 2.0, 11.0)).unwrap()
        })
        .collect();
    let result = difference_all(&plate, tools);
    assert_relative_eq!(volume(&result), 1000.0 - 9.0 * 4.0, epsilon = 1e-6);
}

#[test]
fn test_union_all_adjacent_cells() {
    let cells: Vec<Solid> = (0..4).map(|i| cube([f64::from(i), 0.0, 0.0], 1.0)).collect();
    let merged = union_all(cells);
    assert_relative_eq!(volume(&merged), 4.0, epsilon = 1e-6);
}

#[test]
fn test_cylinder_volume_matches_polygon_area() {
    let segments = 24;
    let solid = Solid::cylinder(DVec2::new(3.0, 3.0), 2.0, 0.0, 1.5, segments).unwrap();
    let n = f64::from(segments);
    let area = 0.5 * n * 4.0 * (std::f64::consts::TAU / n).sin();
    assert_relative_eq!(volume(&solid), area * 1.5, epsilon = 1e-9);
}

#[test]
fn test_cylinder_pocket() {
    let plate = cube([0.0; 3], 10.0);
    let segments = 32;
    let pocket = Solid::cylinder(DVec2::new(5.0, 5.0), 2.0, -1.0, 0.5, segments).unwrap();
    let n = f64::from(segments);
    let area = 0.5 * n * 4.0 * (std::f64::consts::TAU / n).sin();
    assert_relative_eq!(volume(&plate.difference(&pocket)), 1000.0 - area * 0.5, epsilon = 1e-6);
}
