//! GPU side of the board: one vertex buffer, one index buffer and a flat
//! color shader, driven through macroquad's miniquad backend.

use macroquad::miniquad::{
    Bindings, BufferId, BufferLayout, BufferSource, BufferType, BufferUsage, PassAction,
    Pipeline, PipelineParams, ShaderId, ShaderMeta, ShaderSource, UniformBlockLayout,
    VertexAttribute, VertexFormat,
};
use macroquad::window::get_internal_gl;

use super::{FrameSink, Vertex, VertexColorBuffer};
use crate::error::{Error, Result};

const VERTEX_SHADER: &str = include_str!("../../res/shaders/vertex.glsl");
const FRAGMENT_SHADER: &str = include_str!("../../res/shaders/fragment.glsl");

/// Behind the board; never visible while every cell has a quad
const CLEAR_COLOR: (f32, f32, f32, f32) = (1.0, 0.0, 0.0, 1.0);

fn shader_meta() -> ShaderMeta {
    ShaderMeta {
        images: vec![],
        uniforms: UniformBlockLayout { uniforms: vec![] },
    }
}

/// QuadRenderer owns the GPU objects for the board. They are created once
/// the window exists and released when the renderer is dropped.
pub struct QuadRenderer {
    vertex_buffer: BufferId,
    index_buffer: BufferId,
    shader: ShaderId,
    pipeline: Pipeline,
    bindings: Bindings,
    index_count: i32,
}

impl QuadRenderer {
    /// Upload the initial quads and build the pipeline.
    /// Must be called from inside the macroquad main loop.
    pub fn new(buffer: &VertexColorBuffer) -> Result<Self> {
        let gl = unsafe { get_internal_gl() };
        let ctx = gl.quad_context;

        let vertex_buffer = ctx.new_buffer(
            BufferType::VertexBuffer,
            BufferUsage::Stream,
            BufferSource::slice(buffer.vertices()),
        );

        let indices = buffer.indices();
        let index_buffer = ctx.new_buffer(
            BufferType::IndexBuffer,
            BufferUsage::Immutable,
            BufferSource::slice(&indices),
        );

        let shader = match ctx.new_shader(
            ShaderSource::Glsl {
                vertex: VERTEX_SHADER,
                fragment: FRAGMENT_SHADER,
            },
            shader_meta(),
        ) {
            Ok(shader) => shader,
            Err(err) => {
                ctx.delete_buffer(vertex_buffer);
                ctx.delete_buffer(index_buffer);
                return Err(Error::Shader(format!("{err:?}")));
            }
        };

        let pipeline = ctx.new_pipeline(
            &[BufferLayout::default()],
            &[
                VertexAttribute::new("in_pos", VertexFormat::Float2),
                VertexAttribute::new("in_color", VertexFormat::Float4),
            ],
            shader,
            PipelineParams::default(),
        );

        let bindings = Bindings {
            vertex_buffers: vec![vertex_buffer],
            index_buffer,
            images: vec![],
        };

        log::debug!(
            "uploaded {} quads ({} indices)",
            buffer.quad_count(),
            indices.len()
        );

        Ok(Self {
            vertex_buffer,
            index_buffer,
            shader,
            pipeline,
            bindings,
            index_count: indices.len() as i32,
        })
    }
}

impl FrameSink for QuadRenderer {
    fn upload_vertex_colors(&mut self, vertices: &[Vertex]) {
        let gl = unsafe { get_internal_gl() };
        gl.quad_context
            .buffer_update(self.vertex_buffer, BufferSource::slice(vertices));
    }

    fn submit_draw(&mut self) {
        let mut gl = unsafe { get_internal_gl() };
        // Anything macroquad has batched goes out first
        gl.flush();

        let ctx = gl.quad_context;
        let (r, g, b, a) = CLEAR_COLOR;
        ctx.begin_default_pass(PassAction::clear_color(r, g, b, a));
        ctx.apply_pipeline(&self.pipeline);
        ctx.apply_bindings(&self.bindings);
        ctx.draw(0, self.index_count, 1);
        ctx.end_render_pass();
    }
}

impl Drop for QuadRenderer {
    fn drop(&mut self) {
        let gl = unsafe { get_internal_gl() };
        let ctx = gl.quad_context;
        ctx.delete_pipeline(self.pipeline);
        ctx.delete_shader(self.shader);
        ctx.delete_buffer(self.vertex_buffer);
        ctx.delete_buffer(self.index_buffer);
    }
}
