//! Algorithm enum for selecting how a generation is computed.
//!
//! Both variants apply the same rule to the same immutable source grid,
//! so they are interchangeable; the choice only affects throughput.

/// Available evolution algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Cells split across the rayon thread pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for the status line
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Next algorithm in `all()` order, wrapping to the first
    pub fn cycle(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|&a| a == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_cycle_visits_both() {
        assert_eq!(Algorithm::Serial.cycle(), Algorithm::Parallel);
        assert_eq!(Algorithm::Serial.cycle().cycle(), Algorithm::Serial);
    }
}
