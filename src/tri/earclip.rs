// Copyright 2025 Lars Brubaker
// License: MIT
//
// Ear-clipping seam. The pipeline only needs "one simple polygon in, index
// triples out"; the default implementation delegates to the `earcutr` crate,
// a Rust port of mapbox earcut.

use super::TriangulateError;
use crate::geom::Point;

/// Triangulates one simple polygon (no holes) into index triples over the
/// polygon's own vertex order.
pub trait EarClip {
    fn triangulate(&self, polygon: &[Point]) -> Result<Vec<u32>, TriangulateError>;
}

/// Default ear-clipping strategy backed by `earcutr`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Earcut;

impl EarClip for Earcut {
    fn triangulate(&self, polygon: &[Point]) -> Result<Vec<u32>, TriangulateError> {
        let mut coords = Vec::with_capacity(polygon.len() * 2);
        for p in polygon {
            coords.push(p.x);
            coords.push(p.y);
        }

        let holes: Vec<usize> = Vec::new();
        let indices = earcutr::earcut(&coords, &holes, 2)
            .map_err(|e| TriangulateError::EarClip(format!("{e:?}")))?;

        Ok(indices.into_iter().map(|i| i as u32).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square_gives_two_triangles() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let indices = Earcut.triangulate(&square).unwrap();
        assert_eq!(indices.len(), 6);
        assert!(indices.iter().all(|&i| i < 4), "index out of range");
    }

    #[test]
    fn triangle_passes_through() {
        let tri = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        let indices = Earcut.triangulate(&tri).unwrap();
        assert_eq!(indices.len(), 3);
    }
}
