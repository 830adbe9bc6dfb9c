use macroquad::prelude::*;

/// Discrete commands raised by key presses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleRun,
    Clear,
    Pause,
    Unpause,
    ReturnToDraw,
}

/// Key → command table
pub const KEY_BINDINGS: [(KeyCode, Command); 5] = [
    (KeyCode::Space, Command::ToggleRun),
    (KeyCode::C, Command::Clear),
    (KeyCode::P, Command::Pause),
    (KeyCode::U, Command::Unpause),
    (KeyCode::R, Command::ReturnToDraw),
];

/// Everything the controller needs to know about input for one frame.
/// Commands are edge triggered: a held key shows up only on the frame it
/// went down.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub commands: Vec<Command>,
    /// Pointer position in window pixels, origin at the top left
    pub pointer: (f32, f32),
    pub primary_down: bool,
    pub secondary_down: bool,
}

impl InputSnapshot {
    /// Was `command` raised this frame?
    pub fn pressed(&self, command: Command) -> bool {
        self.commands.contains(&command)
    }

    /// Builder used by tests and replays
    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn with_pointer(mut self, x: f32, y: f32) -> Self {
        self.pointer = (x, y);
        self
    }

    pub fn with_buttons(mut self, primary: bool, secondary: bool) -> Self {
        self.primary_down = primary;
        self.secondary_down = secondary;
        self
    }
}

/// Read this frame's keyboard and mouse state from the window
pub fn poll() -> InputSnapshot {
    let commands = KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect();

    InputSnapshot {
        commands,
        pointer: mouse_position(),
        primary_down: is_mouse_button_down(MouseButton::Left),
        secondary_down: is_mouse_button_down(MouseButton::Right),
    }
}
