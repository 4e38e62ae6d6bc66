// Copyright 2025 Lars Brubaker
// License: MIT
//
// tricut: 2D polygon triangulation with automatic self-intersection handling.
// Simple outlines go straight to ear clipping; self-intersecting outlines are
// first split into simple pieces by a non-zero boolean self-union, then each
// piece is triangulated and merged into one vertex/index result.

pub mod geom;
pub mod interchange;
pub mod tri;

pub use geom::{has_self_intersections, segments_cross, Point, Real};
pub use tri::{
    EarClip, Earcut, OverlayUnion, Resolve, Triangle, TriangulateError, Triangulation,
    Triangulator,
};
