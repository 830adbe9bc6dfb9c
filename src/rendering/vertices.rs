use crate::application::{Hover, HoverTint};
use crate::domain::Grid;

pub type Rgba = [f32; 4];

pub const ALIVE_COLOR: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const DEAD_COLOR: Rgba = [1.0, 1.0, 1.0, 1.0];
/// Hover highlight over a dead cell
pub const LIGHT_TINT: Rgba = [0.7, 0.7, 0.7, 1.0];
/// Hover highlight over a live cell
pub const DARK_TINT: Rgba = [0.2, 0.2, 0.2, 1.0];

/// Layout matches the `in_pos` / `in_color` attributes of the pipeline
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Rgba,
}

/// Color a cell is drawn with when nothing is hovering it
pub const fn cell_color(alive: bool) -> Rgba {
    if alive { ALIVE_COLOR } else { DEAD_COLOR }
}

impl HoverTint {
    pub const fn color(self) -> Rgba {
        match self {
            HoverTint::Light => LIGHT_TINT,
            HoverTint::Dark => DARK_TINT,
        }
    }
}

/// VertexColorBuffer is the CPU copy of the GPU vertex buffer: one quad per
/// interior cell, in the grid's column-major order. Positions are fixed at
/// construction; colors are rewritten from the grid by [`sync`].
///
/// [`sync`]: VertexColorBuffer::sync
#[derive(Clone, Debug)]
pub struct VertexColorBuffer {
    rows: usize,
    vertices: Vec<Vertex>,
}

impl VertexColorBuffer {
    /// Lay out a quad per interior cell in normalized device coordinates,
    /// cell (1, 1) at the bottom-left corner
    pub fn new(grid: &Grid) -> Self {
        let (cols, rows) = grid.dimensions();
        let w = 2.0 / cols as f32;
        let h = 2.0 / rows as f32;

        let mut vertices = Vec::with_capacity(grid.interior_len() * 4);
        for (x, y, cell) in grid.iter_interior() {
            let left = -1.0 + (x - 1) as f32 * w;
            let bottom = -1.0 + (y - 1) as f32 * h;
            let color = cell_color(cell.is_alive());

            vertices.extend([
                Vertex { position: [left, bottom], color },
                Vertex { position: [left + w, bottom], color },
                Vertex { position: [left + w, bottom + h], color },
                Vertex { position: [left, bottom + h], color },
            ]);
        }

        Self { rows, vertices }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Two triangles per quad
    pub fn indices(&self) -> Vec<u16> {
        (0..self.quad_count())
            .flat_map(|quad| {
                let i = (quad * 4) as u16;
                [i, i + 1, i + 2, i + 2, i + 3, i]
            })
            .collect()
    }

    /// Color of the quad for interior cell `(x, y)`
    pub fn color_at(&self, x: usize, y: usize) -> Rgba {
        self.vertices[self.quad_index(x, y) * 4].color
    }

    const fn quad_index(&self, x: usize, y: usize) -> usize {
        (x - 1) * self.rows + (y - 1)
    }

    /// Recolor every quad from the grid, then overlay the hover tint
    pub fn sync(&mut self, grid: &Grid, hover: Option<Hover>) {
        debug_assert_eq!(grid.interior_len(), self.quad_count());

        for ((_, _, cell), quad) in grid.iter_interior().zip(self.vertices.chunks_exact_mut(4)) {
            let color = cell_color(cell.is_alive());
            quad.iter_mut().for_each(|v| v.color = color);
        }

        if let Some(Hover { x, y, tint: Some(tint) }) = hover {
            let start = self.quad_index(x, y) * 4;
            self.vertices[start..start + 4]
                .iter_mut()
                .for_each(|v| v.color = tint.color());
        }
    }
}
