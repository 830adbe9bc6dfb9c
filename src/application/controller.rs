use crate::domain::Grid;
use crate::input::{Command, InputSnapshot};

/// What the user is currently doing with the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Painting cells with the mouse
    #[default]
    Drawing,
    /// Simulation advancing on its timer
    Running,
    /// Simulation frozen, board left as is
    Paused,
}

/// Highlight shown on the cell under the pointer while drawing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTint {
    /// Shown on a dead cell
    Light,
    /// Shown on a live cell
    Dark,
}

/// The cell under the pointer. `tint` is dropped once the cell is painted,
/// so the cell shows its true color until the pointer moves on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hover {
    pub x: usize,
    pub y: usize,
    pub tint: Option<HoverTint>,
}

/// InteractionController turns a frame of input into board edits and
/// mode changes.
///
/// | mode    | command      | effect                        |
/// |---------|--------------|-------------------------------|
/// | Drawing | ToggleRun    | drop hover, → Running         |
/// | Drawing | Clear        | reset board                   |
/// | Running | Pause        | → Paused                      |
/// | Running | ReturnToDraw | → Drawing, board kept         |
/// | Paused  | Unpause      | → Running                     |
/// | Paused  | ReturnToDraw | reset board, → Drawing        |
///
/// Anything else is ignored.
#[derive(Clone, Debug)]
pub struct InteractionController {
    mode: Mode,
    hover: Option<Hover>,
    cell_scale: f32,
    surface_height: f32,
}

impl InteractionController {
    /// `surface_height` is the window height in pixels; pointer rows are
    /// counted up from the bottom edge.
    pub fn new(cell_scale: f32, surface_height: f32) -> Self {
        Self {
            mode: Mode::default(),
            hover: None,
            cell_scale,
            surface_height,
        }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn hover(&self) -> Option<Hover> {
        self.hover
    }

    /// Apply one frame of input
    pub fn handle(&mut self, input: &InputSnapshot, grid: &mut Grid) {
        match self.mode {
            Mode::Drawing => self.handle_drawing(input, grid),
            Mode::Running => self.handle_running(input),
            Mode::Paused => self.handle_paused(input, grid),
        }
    }

    fn handle_drawing(&mut self, input: &InputSnapshot, grid: &mut Grid) {
        if input.pressed(Command::ToggleRun) {
            self.hover = None;
            self.transition(Mode::Running);
            return;
        }

        if input.pressed(Command::Clear) {
            grid.reset_all();
            self.hover = None;
            log::debug!("board cleared");
            return;
        }

        let Some((x, y)) = self.pointer_to_cell(input.pointer, grid) else {
            self.hover = None;
            return;
        };

        if self.hover.is_none_or(|h| (h.x, h.y) != (x, y)) {
            let tint = if grid.get(x, y) { HoverTint::Dark } else { HoverTint::Light };
            self.hover = Some(Hover { x, y, tint: Some(tint) });
        }

        let paint = if input.primary_down {
            Some(true)
        } else if input.secondary_down {
            Some(false)
        } else {
            None
        };

        if let Some(alive) = paint {
            grid.set_alive(x, y, alive);
            if let Some(hover) = self.hover.as_mut() {
                hover.tint = None;
            }
        }
    }

    fn handle_running(&mut self, input: &InputSnapshot) {
        if input.pressed(Command::Pause) {
            self.transition(Mode::Paused);
        } else if input.pressed(Command::ReturnToDraw) {
            self.transition(Mode::Drawing);
        }
    }

    fn handle_paused(&mut self, input: &InputSnapshot, grid: &mut Grid) {
        if input.pressed(Command::Unpause) {
            self.transition(Mode::Running);
        } else if input.pressed(Command::ReturnToDraw) {
            grid.reset_all();
            self.transition(Mode::Drawing);
        }
    }

    fn transition(&mut self, to: Mode) {
        log::info!("{:?} -> {:?}", self.mode, to);
        self.mode = to;
    }

    /// Map a window pixel to an interior cell, if the pixel is over one
    fn pointer_to_cell(&self, (px, py): (f32, f32), grid: &Grid) -> Option<(usize, usize)> {
        let (cols, rows) = grid.dimensions();
        if !(px >= 0.0 && py <= self.surface_height) {
            return None;
        }

        let x = (px / self.cell_scale).floor() as usize + 1;
        let y = ((self.surface_height - py) / self.cell_scale).floor() as usize + 1;
        (x <= cols && y <= rows).then_some((x, y))
    }
}
