mod gpu;
mod vertices;

pub use gpu::QuadRenderer;
pub use vertices::{
    ALIVE_COLOR, DARK_TINT, DEAD_COLOR, LIGHT_TINT, Rgba, Vertex, VertexColorBuffer, cell_color,
};

/// Where a frame's vertex colors go. The upload always precedes the draw
/// that reads it.
pub trait FrameSink {
    /// Replace the GPU copy of the vertex buffer
    fn upload_vertex_colors(&mut self, vertices: &[Vertex]);

    /// Issue the indexed draw for the whole board
    fn submit_draw(&mut self);
}
