// Copyright 2025 Lars Brubaker
// Shared test utilities for tricut tests.

#![allow(dead_code)]

use tricut::{Point, Triangulation};

/// Signed area of a triangle given three points.
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y))
}

/// Total absolute area of all triangles in an index-mode result.
pub fn total_triangulation_area(out: &Triangulation) -> f64 {
    out.indices
        .chunks_exact(3)
        .map(|t| {
            triangle_area(
                out.vertices[t[0] as usize],
                out.vertices[t[1] as usize],
                out.vertices[t[2] as usize],
            )
            .abs()
        })
        .sum()
}

/// Sorted list of absolute triangle areas, for comparing triangulations that
/// may order or split faces differently.
pub fn triangle_area_set(out: &Triangulation) -> Vec<f64> {
    let mut areas: Vec<f64> = out
        .indices
        .chunks_exact(3)
        .map(|t| {
            triangle_area(
                out.vertices[t[0] as usize],
                out.vertices[t[1] as usize],
                out.vertices[t[2] as usize],
            )
            .abs()
        })
        .collect();
    areas.sort_by(|a, b| a.partial_cmp(b).unwrap());
    areas
}

/// Verify structural validity: index count is a multiple of 3, every index
/// is in range, every coordinate is finite.
pub fn verify_valid_output(out: &Triangulation) {
    assert_eq!(
        out.indices.len() % 3,
        0,
        "index count {} is not a multiple of 3",
        out.indices.len()
    );
    for (i, &idx) in out.indices.iter().enumerate() {
        assert!(
            (idx as usize) < out.vertices.len(),
            "indices[{}] = {} out of range (vertex count {})",
            i,
            idx,
            out.vertices.len()
        );
    }
    for (i, p) in out.vertices.iter().enumerate() {
        assert!(
            p.x.is_finite() && p.y.is_finite(),
            "vertex {} = ({}, {}) is not finite",
            i,
            p.x,
            p.y
        );
    }
}

/// Canonical form of a triangle's vertex set: coordinate pairs as raw bits,
/// sorted, so triangles compare equal regardless of vertex order.
pub fn canonical_triangle(points: &[Point]) -> Vec<(u64, u64)> {
    let mut set: Vec<(u64, u64)> = points
        .iter()
        .map(|p| (p.x.to_bits(), p.y.to_bits()))
        .collect();
    set.sort_unstable();
    set.dedup();
    set
}

/// Build a polygon from (x, y) tuples.
pub fn polygon(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}
