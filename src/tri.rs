// Copyright 2025 Lars Brubaker
// License: MIT
//
// Top-level triangulation pipeline. Simple outlines are routed straight to
// the ear-clipping strategy; self-intersecting outlines are first split into
// simple sub-polygons by a boolean self-union, each piece is triangulated
// independently, and the per-piece results are merged into one vertex/index
// buffer pair with offset-corrected indices.

mod earclip;
mod resolve;

pub use earclip::{EarClip, Earcut};
pub use resolve::{OverlayUnion, Resolve};

use crate::geom::{has_self_intersections, Point};
use thiserror::Error;

/// A single output triangle in explicit-coordinate form.
pub type Triangle = [Point; 3];

#[derive(Debug, Error)]
pub enum TriangulateError {
    /// The ear-clipping strategy rejected a polygon. Not raised for inputs
    /// with fewer than 3 vertices, which triangulate to an empty result.
    #[error("ear clipping failed: {0}")]
    EarClip(String),
}

/// Index-mode triangulation result.
///
/// `indices` always reference `vertices`, never the caller's buffer. For a
/// simple polygon `vertices` is the input verbatim; when self-intersections
/// had to be resolved it is the concatenation of the resolved sub-polygons,
/// which generally differs from the input in both count and coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation {
    pub vertices: Vec<Point>,
    pub indices: Vec<u32>,
}

impl Triangulation {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Polygon triangulator with pluggable strategies.
///
/// `E` triangulates one simple polygon, `R` splits a self-intersecting
/// outline into simple pieces. The defaults delegate to `earcutr` and to an
/// `i_overlay` non-zero self-union; substitute stubs through
/// [`Triangulator::with_strategies`] to test or replace either seam.
///
/// Holds no state across calls, so one instance may be shared freely between
/// threads.
#[derive(Copy, Clone, Debug, Default)]
pub struct Triangulator<E = Earcut, R = OverlayUnion> {
    ear_clip: E,
    resolver: R,
}

impl Triangulator {
    pub fn new() -> Self {
        Triangulator {
            ear_clip: Earcut,
            resolver: OverlayUnion,
        }
    }
}

impl<E: EarClip, R: Resolve> Triangulator<E, R> {
    pub fn with_strategies(ear_clip: E, resolver: R) -> Self {
        Triangulator { ear_clip, resolver }
    }

    /// Triangulates a polygon, returning the vertex buffer the indices refer
    /// to together with the index triples.
    ///
    /// Winding order does not matter. Inputs with fewer than 3 vertices are
    /// not an error: they echo back as the vertex buffer with empty indices.
    /// A self-union that yields no usable piece (all pieces below 3 vertices)
    /// degrades to ear-clipping the raw outline instead of failing.
    pub fn triangulate(&self, polygon: &[Point]) -> Result<Triangulation, TriangulateError> {
        if polygon.len() < 3 {
            return Ok(Triangulation {
                vertices: polygon.to_vec(),
                indices: Vec::new(),
            });
        }

        if !has_self_intersections(polygon) {
            let indices = self.ear_clip.triangulate(polygon)?;
            return Ok(Triangulation {
                vertices: polygon.to_vec(),
                indices,
            });
        }

        let pieces: Vec<Vec<Point>> = self
            .resolver
            .resolve(polygon)
            .into_iter()
            .filter(|piece| piece.len() >= 3)
            .collect();

        if pieces.is_empty() {
            // Best-effort degrade: treat the outline as if it were simple.
            let indices = self.ear_clip.triangulate(polygon)?;
            return Ok(Triangulation {
                vertices: polygon.to_vec(),
                indices,
            });
        }

        let mut vertices = Vec::with_capacity(pieces.iter().map(Vec::len).sum());
        let mut indices = Vec::new();
        let mut offset = 0u32;

        for piece in &pieces {
            let piece_indices = self.ear_clip.triangulate(piece)?;
            indices.extend(piece_indices.into_iter().map(|i| i + offset));
            vertices.extend_from_slice(piece);
            offset += piece.len() as u32;
        }

        Ok(Triangulation { vertices, indices })
    }

    /// Triangulates a polygon into explicit coordinate triples.
    ///
    /// Each triple is looked up in the same vertex buffer
    /// [`Triangulator::triangulate`] returns: the input verbatim for a simple
    /// polygon, the resolved sub-polygon concatenation when the outline
    /// self-intersected. The latter is an extension over plain index lookup
    /// into the input; the points always come from the buffer the indices
    /// actually reference.
    pub fn triangulate_triangles(
        &self,
        polygon: &[Point],
    ) -> Result<Vec<Triangle>, TriangulateError> {
        let out = self.triangulate(polygon)?;
        Ok(out
            .indices
            .chunks_exact(3)
            .map(|t| {
                [
                    out.vertices[t[0] as usize],
                    out.vertices[t[1] as usize],
                    out.vertices[t[2] as usize],
                ]
            })
            .collect())
    }
}
