use crate::domain::{AutomatonEngine, Grid};
use crate::input::InputSnapshot;
use crate::rendering::{FrameSink, VertexColorBuffer};

use super::{InteractionController, Mode, Settings};

/// FrameLoop owns the board and everything derived from it, and runs one
/// input → update → upload → draw pass per call to [`FrameLoop::frame`].
pub struct FrameLoop {
    grid: Grid,
    engine: AutomatonEngine,
    controller: InteractionController,
    buffer: VertexColorBuffer,
    /// Seconds since the last generation step
    counter: f32,
    generation: u64,
    generation_interval: f32,
    max_frame_time: f32,
}

impl FrameLoop {
    /// Build the board for `settings`. Settings are expected to be valid.
    pub fn new(settings: &Settings) -> Self {
        let (cols, rows) = settings.grid_dimensions();
        let grid = Grid::new(cols, rows);
        let buffer = VertexColorBuffer::new(&grid);

        Self {
            engine: AutomatonEngine::new(settings.rule.build()),
            controller: InteractionController::new(
                settings.cell_scale as f32,
                settings.window_height as f32,
            ),
            grid,
            buffer,
            counter: 0.0,
            generation: 0,
            generation_interval: settings.generation_interval,
            max_frame_time: settings.max_frame_time,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// Generations stepped since startup
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn engine(&self) -> &AutomatonEngine {
        &self.engine
    }

    pub fn vertex_buffer(&self) -> &VertexColorBuffer {
        &self.buffer
    }

    /// Run one frame. `dt` is the wall-clock time since the previous frame
    /// and is clamped to `max_frame_time`.
    pub fn frame<S: FrameSink + ?Sized>(&mut self, input: &InputSnapshot, dt: f32, sink: &mut S) {
        let dt = dt.clamp(0.0, self.max_frame_time);

        self.controller.handle(input, &mut self.grid);

        let mode = self.controller.mode();
        if mode != Mode::Paused {
            if mode == Mode::Running && self.counter > self.generation_interval {
                self.engine.step(&mut self.grid);
                self.generation += 1;
                self.counter = 0.0;
                log::trace!("generation {}", self.generation);
            }

            self.buffer.sync(&self.grid, self.controller.hover());
            sink.upload_vertex_colors(self.buffer.vertices());
        }

        sink.submit_draw();
        self.counter += dt;
    }
}
