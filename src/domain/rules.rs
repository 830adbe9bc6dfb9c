use super::Cell;

/// Birth/survival policy the engine applies to each interior cell.
/// Implementations must be pure: the same cell and count always give the
/// same answer, whichever thread asks.
pub trait Rule: Send + Sync {
    /// Short label shown in logs and the benchmark table
    fn name(&self) -> &'static str;

    /// The rule in `B.../S...` notation
    fn description(&self) -> &'static str;

    /// State of a cell in the next generation, given its state now and
    /// how many of its 8 neighbors are alive
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// The board's default rule (B23/S01245678).
///
/// A dead cell comes alive with 2 or 3 neighbors; a live cell dies only
/// when it has exactly 3. This is not classic Life: a lone cell lives
/// forever and a 2x2 block turns into a ring.
#[derive(Clone, Copy, Debug, Default)]
pub struct InvertedLifeRule;

impl Rule for InvertedLifeRule {
    fn name(&self) -> &'static str {
        "Inverted"
    }

    fn description(&self) -> &'static str {
        "B23/S01245678"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Dead, 2 | 3) => Cell::Alive,
            (Cell::Dead, _) => Cell::Dead,
            (Cell::Alive, 3) => Cell::Dead,
            (Cell::Alive, _) => Cell::Alive,
        }
    }
}

/// Standard Life (B3/S23): three neighbors bring a cell to life, two or
/// three keep it alive, anything else leaves it dead.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        let survives = current.is_alive() && neighbors == 2;
        Cell::from_alive(neighbors == 3 || survives)
    }
}

/// Selector for the rule the simulation starts with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RuleKind {
    #[default]
    Inverted,
    Conway,
}

impl RuleKind {
    /// Instantiate the selected rule
    pub fn build(self) -> Box<dyn Rule> {
        match self {
            RuleKind::Inverted => Box::new(InvertedLifeRule),
            RuleKind::Conway => Box::new(ConwayRule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_birth() {
        let rule = InvertedLifeRule;

        assert_eq!(rule.evolve(Cell::Dead, 2), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Alive);

        for n in [0, 1, 4, 5, 6, 7, 8] {
            assert_eq!(rule.evolve(Cell::Dead, n), Cell::Dead, "dead with {n}");
        }
    }

    #[test]
    fn test_inverted_death_only_at_three() {
        let rule = InvertedLifeRule;

        assert_eq!(rule.evolve(Cell::Alive, 3), Cell::Dead);

        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(rule.evolve(Cell::Alive, n), Cell::Alive, "alive with {n}");
        }
    }

    #[test]
    fn test_conway_birth_needs_exactly_three() {
        let rule = ConwayRule;
        for n in 0..=8 {
            let expected = Cell::from_alive(n == 3);
            assert_eq!(rule.evolve(Cell::Dead, n), expected, "dead with {n}");
        }
    }

    #[test]
    fn test_conway_survival_on_two_or_three() {
        let rule = ConwayRule;
        for n in 0..=8 {
            let expected = Cell::from_alive(n == 2 || n == 3);
            assert_eq!(rule.evolve(Cell::Alive, n), expected, "alive with {n}");
        }
    }

    #[test]
    fn test_rule_kind_builds_matching_rule() {
        assert_eq!(RuleKind::default(), RuleKind::Inverted);
        assert_eq!(RuleKind::Inverted.build().name(), "Inverted");
        assert_eq!(RuleKind::Conway.build().name(), "Conway");
    }
}
