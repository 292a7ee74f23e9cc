use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Table is full: all {capacity} slots are occupied")]
    CapacityExhausted { capacity: usize },
    #[error("Table capacity must be greater than zero")]
    ZeroCapacity,
}

#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("Invalid benchmark configuration: {0}")]
    InvalidConfig(String),
}
