use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupingError {
    /// Pairwise coverage did not reproduce the standalone family lengths.
    /// This is an accounting bug, never a property of the input.
    #[error(
        "length mismatch for families {a} and {b}: pairwise coverage gave {a_len} and {b_len}, expected {expected_a} and {expected_b}"
    )]
    Consistency {
        a: usize,
        b: usize,
        a_len: u64,
        b_len: u64,
        expected_a: u64,
        expected_b: u64,
    },

    #[error("Invalid threshold {0}: must be within [0, 1]")]
    InvalidThreshold(f64),

    #[error("Invalid grouping config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GroupingError>;
