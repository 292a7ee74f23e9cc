use serde::{Deserialize, Serialize};

use crate::error::BenchmarkError;
use crate::table::Key;

pub const DEFAULT_CAPACITY: usize = 1000; // slots per table
pub const DEFAULT_ELEMENT_COUNT: usize = 800; // 80% load factor
pub const DEFAULT_KEY_MIN: Key = 1;
pub const DEFAULT_KEY_MAX: Key = 100000; // inclusive
pub const DEFAULT_SEED: u64 = 42;

/// Parameters for one comparison run. Both tables are built with the same values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub capacity: usize,
    pub element_count: usize,
    pub key_min: Key,
    pub key_max: Key,
    /// `None` seeds the generator from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            element_count: DEFAULT_ELEMENT_COUNT,
            key_min: DEFAULT_KEY_MIN,
            key_max: DEFAULT_KEY_MAX,
            seed: Some(DEFAULT_SEED),
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), BenchmarkError> {
        if self.capacity == 0 {
            return Err(BenchmarkError::InvalidConfig(
                "capacity must be greater than zero".to_string(),
            ));
        }
        if self.element_count == 0 {
            return Err(BenchmarkError::InvalidConfig(
                "element count must be greater than zero".to_string(),
            ));
        }
        if self.key_min > self.key_max {
            return Err(BenchmarkError::InvalidConfig(format!(
                "key range {}..={} is empty",
                self.key_min, self.key_max
            )));
        }
        Ok(())
    }

    pub fn load_factor(&self) -> f64 {
        self.element_count as f64 / self.capacity as f64
    }
}
