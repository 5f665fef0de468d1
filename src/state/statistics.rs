// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the grouper as
//! triples flow through the pipeline.

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Triples that reached the scorer.
    Scored,
    /// Triples with m <= 0.
    NonPositive,
    /// Triples added to a group.
    Grouped,
    /// Groups created (distinct m-values).
    MValues,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Log every counter at info level.
    pub fn log(&self) {
        use strum::IntoEnumIterator;
        for counter in Counters::iter() {
            let name: &'static str = counter.into();
            tracing::info!(counter = name, value = self.get(counter), "statistics");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::Scored), 0);
        assert_eq!(stats.get(Counters::MValues), 0);
    }

    #[test]
    fn test_increment() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Scored);
        stats.increment_counter(Counters::Scored);
        stats.increment_counter(Counters::NonPositive);
        assert_eq!(stats.get(Counters::Scored), 2);
        assert_eq!(stats.get(Counters::NonPositive), 1);
        assert_eq!(stats.get(Counters::Grouped), 0);
    }

    #[test]
    fn test_counter_names() {
        let name: &'static str = Counters::NonPositive.into();
        assert_eq!(name, "non_positive");
        let name: &'static str = Counters::MValues.into();
        assert_eq!(name, "m_values");
    }
}
