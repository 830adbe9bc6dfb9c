/// Cell is one square of the board.
/// Its color on screen is derived from this state, never the other way round.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Build a cell from a plain alive flag
    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Neighbor contribution: 1 if alive, 0 otherwise
    pub const fn weight(self) -> u8 {
        self.is_alive() as u8
    }
}
