use macroquad::window::Conf;

use crate::domain::RuleKind;
use crate::error::{Error, Result};

/// Indices into the vertex buffer are `u16`, which caps the number of quads.
const MAX_VERTICES: usize = u16::MAX as usize + 1;

/// Settings fixes everything about a run up front: window, board scale,
/// simulation pace and rule. There is no runtime configuration surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,
    /// Side of one cell in window pixels
    pub cell_scale: u32,
    /// Seconds between generations while running
    pub generation_interval: f32,
    /// Upper bound on a single frame's delta, in seconds
    pub max_frame_time: f32,
    pub rule: RuleKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            title: "Game of Life".to_owned(),
            cell_scale: 10,
            generation_interval: 0.1,
            max_frame_time: 1.0 / 30.0,
            rule: RuleKind::default(),
        }
    }
}

impl Settings {
    /// Interior board size `(cols, rows)` for this window and scale
    pub fn grid_dimensions(&self) -> (usize, usize) {
        if self.cell_scale == 0 {
            return (0, 0);
        }
        (
            (self.window_width / self.cell_scale) as usize,
            (self.window_height / self.cell_scale) as usize,
        )
    }

    /// Reject settings that would give an empty board or an unindexable one
    pub fn validate(&self) -> Result<()> {
        if self.cell_scale == 0 {
            return Err(Error::InvalidSettings("cell scale must be non-zero".into()));
        }

        let (cols, rows) = self.grid_dimensions();
        if cols == 0 || rows == 0 {
            return Err(Error::InvalidSettings(format!(
                "{}x{} window is smaller than one {}px cell",
                self.window_width, self.window_height, self.cell_scale
            )));
        }

        // Quads span the whole window, so they are only `cell_scale` pixels
        // wide when the window divides evenly
        if self.window_width % self.cell_scale != 0 || self.window_height % self.cell_scale != 0 {
            return Err(Error::InvalidSettings(format!(
                "{}x{} window is not a multiple of the {}px cell",
                self.window_width, self.window_height, self.cell_scale
            )));
        }

        if cols * rows * 4 > MAX_VERTICES {
            return Err(Error::InvalidSettings(format!(
                "{cols}x{rows} board needs more than {MAX_VERTICES} vertices"
            )));
        }

        if !(self.generation_interval > 0.0 && self.max_frame_time > 0.0) {
            return Err(Error::InvalidSettings("timings must be positive".into()));
        }

        Ok(())
    }

    /// Window configuration handed to macroquad at startup
    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: self.title.clone(),
            window_width: self.window_width as i32,
            window_height: self.window_height as i32,
            window_resizable: false,
            ..Default::default()
        }
    }
}
