// Copyright 2025 Lars Brubaker
// License: MIT
//
// JSON interchange for the triangulation types. A polygon travels as a list
// of `[x, y]` pairs, a triangle set as a list of three-pair lists. The core
// pipeline never touches this module; it exists for hosts that speak JSON.

use crate::geom::Point;
use crate::tri::Triangle;

/// Parses a polygon from a JSON array of `[x, y]` pairs.
pub fn polygon_from_json(json: &str) -> Result<Vec<Point>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serializes a polygon to a JSON array of `[x, y]` pairs.
pub fn polygon_to_json(polygon: &[Point]) -> Result<String, serde_json::Error> {
    serde_json::to_string(polygon)
}

/// Serializes a triangle set to a JSON array of 3-element point lists.
pub fn triangles_to_json(triangles: &[Triangle]) -> Result<String, serde_json::Error> {
    serde_json::to_string(triangles)
}

/// Parses a triangle set from a JSON array of 3-element point lists.
pub fn triangles_from_json(json: &str) -> Result<Vec<Triangle>, serde_json::Error> {
    serde_json::from_str(json)
}
