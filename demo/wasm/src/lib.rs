// Copyright 2025 Lars Brubaker
// WASM bindings for tricut.

use tricut::{Point, Triangulator};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

/// Index-mode triangulation over flat `[x0,y0, x1,y1, ...]` coordinates.
///
/// After a successful `triangulate` call, `vertices()` returns the flat
/// buffer the `indices()` triples reference. For a self-intersecting outline
/// that buffer holds the resolved geometry, not the input.
#[wasm_bindgen]
pub struct TriangulatorJs {
    inner: Triangulator,
    vertices: Vec<f64>,
    indices: Vec<u32>,
}

#[wasm_bindgen]
impl TriangulatorJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TriangulatorJs {
        TriangulatorJs {
            inner: Triangulator::new(),
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Triangulate a flat outline. Returns true on success.
    pub fn triangulate(&mut self, coords: &[f64]) -> bool {
        let polygon: Vec<Point> = coords
            .chunks_exact(2)
            .map(|c| Point::new(c[0], c[1]))
            .collect();
        match self.inner.triangulate(&polygon) {
            Ok(out) => {
                self.vertices = out.vertices.iter().flat_map(|p| [p.x, p.y]).collect();
                self.indices = out.indices;
                true
            }
            Err(_) => false,
        }
    }

    /// Flat vertex buffer from the last triangulate call.
    pub fn vertices(&self) -> Vec<f64> {
        self.vertices.clone()
    }

    /// Index triples from the last triangulate call.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }
}

impl Default for TriangulatorJs {
    fn default() -> Self {
        Self::new()
    }
}
