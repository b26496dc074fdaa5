//! Support for the `bst-demo` driver: a seeded source of random values so every run with the
//! same settings builds the same tree.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

/// Settings for one demo run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Seed for the random number generator.
    pub seed: u64,
    /// How many values to draw. Duplicates are dropped when the tree is built.
    pub count: usize,
    /// Smallest value that may be drawn.
    pub min: i32,
    /// Values are drawn strictly below this bound.
    pub max: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            count: 15,
            min: 1,
            max: 100,
        }
    }
}

impl DemoConfig {
    /// Checks that the settings describe at least one value from a non-empty range.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `count` is zero or `min` is not below `max`.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::InvalidArgument("count must be positive".to_string()));
        }
        if self.min >= self.max {
            return Err(Error::InvalidArgument(format!(
                "min ({}) must be less than max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// The half-open range values are drawn from.
    pub fn range(&self) -> Range<i32> {
        self.min..self.max
    }
}

/// Draws `config.count` values from `config.range()` using a generator seeded with
/// `config.seed`.
///
/// # Errors
///
/// Whatever [`DemoConfig::validate`] rejects.
pub fn random_values(config: &DemoConfig) -> Result<Vec<i32>> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    Ok((0..config.count)
        .map(|_| rng.gen_range(config.range()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_values() {
        let config = DemoConfig::default();

        assert_eq!(random_values(&config), random_values(&config));
    }

    #[test]
    fn different_seeds_differ() {
        let config = DemoConfig {
            count: 50,
            ..DemoConfig::default()
        };
        let other = DemoConfig {
            seed: 7,
            ..config.clone()
        };

        assert_ne!(random_values(&config), random_values(&other));
    }

    #[test]
    fn values_respect_count_and_range() {
        let config = DemoConfig {
            seed: 3,
            count: 200,
            min: -5,
            max: 5,
        };
        let values = random_values(&config).unwrap();

        assert_eq!(values.len(), 200);
        assert!(values.iter().all(|x| config.range().contains(x)));
    }

    #[test]
    fn rejects_empty_range() {
        let config = DemoConfig {
            min: 10,
            max: 10,
            ..DemoConfig::default()
        };

        assert_eq!(
            random_values(&config),
            Err(Error::InvalidArgument(
                "min (10) must be less than max (10)".to_string()
            ))
        );
    }

    #[test]
    fn rejects_zero_count() {
        let config = DemoConfig {
            count: 0,
            ..DemoConfig::default()
        };

        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
    }
}
