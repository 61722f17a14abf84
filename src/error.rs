use thiserror::Error;

/// Errors returned by the clustering and recommendation layers of this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// The student table contains the same identifier twice.
    #[error("duplicate student id {0}")]
    DuplicateStudentId(u64),

    /// A recommendation query was issued with no student identifiers.
    #[error("empty query: at least one student id is required")]
    EmptyQuery,

    /// Reading or decoding an input table failed.
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    /// Reading or decoding a JSON configuration failed.
    #[error("config: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error stems from a bad clustering configuration.
    ///
    /// These are raised once while building a [`Snapshot`](crate::Snapshot) and are fatal:
    /// no queries may be served over a model that failed to build.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidParameter { .. } | Error::InvalidClusterCount { .. }
        )
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
