// Copyright 2025 Lars Brubaker
// License: MIT
//
// Pure 2D geometric primitives for the triangulation pipeline: the point
// type, the strict segment-crossing test, and the edge-pair scan that
// classifies an outline as simple or self-intersecting.

use serde::{Deserialize, Serialize};

pub type Real = f64;

/// Denominators below this are treated as parallel segments. This also means
/// exactly collinear overlapping segments are never reported as crossing.
const PARALLEL_EPS: Real = 1e-10;

/// A 2D point. Serializes as a two-element `[x, y]` array, matching the
/// interchange format.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Real; 2]", into = "[Real; 2]")]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    pub const fn new(x: Real, y: Real) -> Self {
        Point { x, y }
    }
}

impl From<[Real; 2]> for Point {
    fn from(p: [Real; 2]) -> Self {
        Point { x: p[0], y: p[1] }
    }
}

impl From<Point> for [Real; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Returns true if segments (p1, p2) and (p3, p4) cross at a point strictly
/// interior to both. Touching at an endpoint does not count, and parallel or
/// collinear pairs are never reported.
pub fn segments_cross(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denom.abs() < PARALLEL_EPS {
        return false;
    }

    // Parameters along (p1,p2) and (p3,p4) of the line-line intersection.
    let t = ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / denom;
    let u = -((p1.x - p2.x) * (p1.y - p3.y) - (p1.y - p2.y) * (p1.x - p3.x)) / denom;

    t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0
}

/// Returns true if any two non-adjacent edges of the (implicitly closed)
/// polygon cross. Brute-force O(N²) scan with early exit; fewer than 4
/// vertices can never self-intersect.
pub fn has_self_intersections(polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 4 {
        return false;
    }

    for i in 0..n {
        let next_i = (i + 1) % n;

        for j in (i + 2)..n {
            // Skip the wrap-around edge adjacent to edge i.
            if j == (i + n - 1) % n {
                continue;
            }
            let next_j = (j + 1) % n;

            if segments_cross(polygon[i], polygon[next_i], polygon[j], polygon[next_j]) {
                return true;
            }
        }
    }

    false
}

/// Shoelace signed area of the (implicitly closed) polygon.
pub fn polygon_signed_area(polygon: &[Point]) -> Real {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += polygon[i].x * polygon[j].y - polygon[j].x * polygon[i].y;
    }
    area * 0.5
}
