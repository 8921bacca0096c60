/// Represents a pattern that can be stamped onto a simulation
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>,  // (row, col) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, height, width, cells }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ]
        )
    }

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                        (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                                        (2, 3),
                                (3, 2), (3, 3),
            ]
        )
    }

    /// Glider - simplest spaceship, moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                        (0, 1),
                                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ]
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ]
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                        (0, 1), (0, 2),
                (1, 0), (1, 1),
                        (2, 1),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            r_pentomino(),
        ]
    }
}
