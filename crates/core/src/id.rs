//! Identifier generation for new movie records.
//!
//! The generator is owned by [`crate::store::MovieStore`], so uniqueness is
//! checked against the live collection at the moment an id is drawn.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::types::MovieId;

/// Exclusive upper bound for [`IdStrategy::Random`] draws.
pub const RANDOM_ID_UPPER_BOUND: u64 = 100_000_000;

/// Returned when an id strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown id strategy '{0}' (expected random, sequential or uuid)")]
pub struct UnknownIdStrategy(pub String);

/// How new ids are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Integer in `0..RANDOM_ID_UPPER_BOUND`, redrawn on collision.
    Random,
    /// Counter starting at 1.
    Sequential,
    /// UUID v4.
    #[default]
    Uuid,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Random => "random",
            IdStrategy::Sequential => "sequential",
            IdStrategy::Uuid => "uuid",
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdStrategy {
    type Err = UnknownIdStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(IdStrategy::Random),
            "sequential" => Ok(IdStrategy::Sequential),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(UnknownIdStrategy(other.to_string())),
        }
    }
}

/// Stateful id source. Only the sequential strategy carries state.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    counter: u64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            counter: 0,
        }
    }

    /// Draw ids until one is not `taken`.
    ///
    /// Sequential ids can collide with ids written through an update of a
    /// missing record, so every strategy goes through the same check.
    pub fn next_id(&mut self, taken: impl Fn(&str) -> bool) -> MovieId {
        loop {
            let candidate = self.draw();
            if !taken(&candidate) {
                return candidate;
            }
            tracing::debug!(id = %candidate, strategy = %self.strategy, "Id collision, redrawing");
        }
    }

    fn draw(&mut self) -> MovieId {
        match self.strategy {
            IdStrategy::Random => rand::rng()
                .random_range(0..RANDOM_ID_UPPER_BOUND)
                .to_string(),
            IdStrategy::Sequential => {
                self.counter += 1;
                self.counter.to_string()
            }
            IdStrategy::Uuid => uuid::Uuid::new_v4().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_strategy_names_case_insensitively() {
        assert_eq!("random".parse::<IdStrategy>().unwrap(), IdStrategy::Random);
        assert_eq!(" Sequential ".parse::<IdStrategy>().unwrap(), IdStrategy::Sequential);
        assert_eq!("UUID".parse::<IdStrategy>().unwrap(), IdStrategy::Uuid);
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert_matches!(
            "Snowflake".parse::<IdStrategy>(),
            Err(UnknownIdStrategy(name)) if name == "snowflake"
        );
    }

    #[test]
    fn sequential_counts_from_one() {
        let mut ids = IdGenerator::new(IdStrategy::Sequential);
        assert_eq!(ids.next_id(|_| false), "1");
        assert_eq!(ids.next_id(|_| false), "2");
        assert_eq!(ids.next_id(|_| false), "3");
    }

    #[test]
    fn sequential_skips_taken_ids() {
        let mut ids = IdGenerator::new(IdStrategy::Sequential);
        assert_eq!(ids.next_id(|id| id == "1" || id == "2"), "3");
    }

    #[test]
    fn random_ids_stay_in_range() {
        let mut ids = IdGenerator::new(IdStrategy::Random);
        for _ in 0..100 {
            let id: u64 = ids.next_id(|_| false).parse().unwrap();
            assert!(id < RANDOM_ID_UPPER_BOUND);
        }
    }

    #[test]
    fn uuid_ids_are_hyphenated_v4() {
        let mut ids = IdGenerator::new(IdStrategy::Uuid);
        let id = ids.next_id(|_| false);
        assert_eq!(id.len(), 36);
        assert_eq!(uuid::Uuid::parse_str(&id).unwrap().get_version_num(), 4);
    }
}
