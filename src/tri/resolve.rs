// Copyright 2025 Lars Brubaker
// License: MIT
//
// Self-intersection resolution seam. The default implementation performs a
// boolean union of the outline with itself under the non-zero fill rule via
// `i_overlay`, which splits a self-intersecting outline into simple contours
// covering the same filled area.

use crate::geom::Point;
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

/// Splits one possibly self-intersecting closed outline into zero or more
/// simple closed paths. Paths with fewer than 3 vertices are useless to the
/// pipeline and may be returned; the caller discards them.
pub trait Resolve {
    fn resolve(&self, polygon: &[Point]) -> Vec<Vec<Point>>;
}

/// Default resolution strategy: non-zero self-union via `i_overlay`.
#[derive(Copy, Clone, Debug, Default)]
pub struct OverlayUnion;

impl Resolve for OverlayUnion {
    fn resolve(&self, polygon: &[Point]) -> Vec<Vec<Point>> {
        let subject: Vec<[f64; 2]> = polygon.iter().map(|p| [p.x, p.y]).collect();

        // Union against an empty clip is the self-union that untangles the
        // outline into simple contours.
        let clip = [Vec::<[f64; 2]>::new()];
        let shapes = subject.overlay(&clip, OverlayRule::Union, FillRule::NonZero);

        let mut paths = Vec::new();
        for shape in &shapes {
            for contour in shape {
                if contour.len() >= 3 {
                    paths.push(contour.iter().map(|&[x, y]| Point::new(x, y)).collect());
                }
            }
        }
        paths
    }
}
