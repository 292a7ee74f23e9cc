//! Timed insert/search workloads against any [`Table`].
//!
//! A run inserts `element_count` uniformly drawn keys (value `"value{i}"` for the i-th insert),
//! then searches `element_count / 2` freshly drawn keys, timing each phase as a whole with
//! [`Instant`], and finally reads the table's memory footprint.

use std::hint::black_box;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use log::{debug, info, log_enabled, Level};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::BenchConfig;
use crate::error::BenchmarkError;
use crate::open_addressing::OpenAddressingTable;
use crate::separate_chaining::SeparateChainingTable;
use crate::table::{Key, Table};

/// What one run observed, before it is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub insert_duration: Duration,
    pub search_duration: Duration,
    pub memory_bytes: usize,
}

/// One row of the result sink: a labelled [`Measurement`]. Durations are stored in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub label: String,
    pub insert_seconds: f64,
    pub search_seconds: f64,
    pub memory_bytes: usize,
}

impl ResultRecord {
    pub fn new(label: &str, measurement: Measurement) -> Self {
        ResultRecord {
            label: label.to_string(),
            insert_seconds: measurement.insert_duration.as_secs_f64(),
            search_seconds: measurement.search_duration.as_secs_f64(),
            memory_bytes: measurement.memory_bytes,
        }
    }
}

pub struct BenchmarkRunner<R>
where
    R: Rng,
{
    rng: R,
    keys: RangeInclusive<Key>,
}

impl BenchmarkRunner<StdRng> {
    /// A runner over the configured key range, seeded from `config.seed` or from OS entropy.
    pub fn from_config(config: &BenchConfig) -> Result<Self, BenchmarkError> {
        config.validate()?;
        let rng: StdRng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(BenchmarkRunner::new(rng, config.key_min..=config.key_max))
    }
}

impl<R> BenchmarkRunner<R>
where
    R: Rng,
{
    pub fn new(rng: R, keys: RangeInclusive<Key>) -> Self {
        BenchmarkRunner { rng, keys }
    }

    #[inline]
    fn draw_key(&mut self) -> Key {
        self.rng.gen_range(self.keys.clone())
    }

    /// Fills `table` with `element_count` random entries, searches half as many random keys and
    /// measures the footprint of the populated table.
    ///
    /// A table error during the insert phase aborts the run.
    pub fn run<T>(
        &mut self,
        table: &mut T,
        element_count: usize,
    ) -> Result<Measurement, BenchmarkError>
    where
        T: Table<String>,
    {
        if element_count == 0 {
            return Err(BenchmarkError::InvalidConfig(
                "element count must be greater than zero".to_string(),
            ));
        }
        if self.keys.is_empty() {
            return Err(BenchmarkError::InvalidConfig(format!(
                "key range {}..={} is empty",
                self.keys.start(),
                self.keys.end()
            )));
        }

        let now: Instant = Instant::now();
        for i in 0..element_count {
            let key: Key = self.draw_key();
            table.insert(key, format!("value{i}"))?;
        }
        let insert_duration: Duration = now.elapsed();
        debug!(
            "{}: inserted {} entries in {:?} (load {})",
            T::LABEL,
            element_count,
            insert_duration,
            table.load_factor()
        );

        let searches: usize = element_count / 2;
        let now: Instant = Instant::now();
        for _ in 0..searches {
            let key: Key = self.draw_key();
            black_box(table.search(key));
        }
        let search_duration: Duration = now.elapsed();
        debug!("{}: ran {} searches in {:?}", T::LABEL, searches, search_duration);

        let memory_bytes: usize = table.memory_footprint();
        debug!("{}: memory footprint {} bytes", T::LABEL, memory_bytes);

        Ok(Measurement {
            insert_duration,
            search_duration,
            memory_bytes,
        })
    }

    /// Builds a fresh table of `capacity` slots, runs it and labels the result.
    pub fn run_fresh<T>(
        &mut self,
        capacity: usize,
        element_count: usize,
    ) -> Result<ResultRecord, BenchmarkError>
    where
        T: Table<String>,
    {
        let mut table: T = T::with_capacity(capacity)?;
        let measurement: Measurement = self.run(&mut table, element_count)?;
        if log_enabled!(Level::Trace) {
            table.log_layout();
        }
        info!(
            "{}: insert {:?}, search {:?}, memory {} bytes",
            T::LABEL,
            measurement.insert_duration,
            measurement.search_duration,
            measurement.memory_bytes
        );
        Ok(ResultRecord::new(T::LABEL, measurement))
    }
}

/// Runs open addressing then separate chaining with identical parameters.
///
/// Both runs draw from the same generator, so the second table sees the continuation of the
/// first table's key stream rather than a replay of it.
pub fn compare(config: &BenchConfig) -> Result<Vec<ResultRecord>, BenchmarkError> {
    let mut runner: BenchmarkRunner<StdRng> = BenchmarkRunner::from_config(config)?;
    info!(
        "comparing tables: capacity {}, elements {}, load factor {}",
        config.capacity,
        config.element_count,
        config.load_factor()
    );
    let results: Vec<ResultRecord> = vec![
        runner.run_fresh::<OpenAddressingTable<String>>(config.capacity, config.element_count)?,
        runner.run_fresh::<SeparateChainingTable<String>>(config.capacity, config.element_count)?,
    ];
    Ok(results)
}
