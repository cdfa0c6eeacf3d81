use thiserror::Error;

use crate::types::DataType;

/// Convenience result type for profiling operations.
pub type ProfilingResult<T> = Result<T, ProfilingError>;

/// Error type returned by profiling functions.
///
/// This is a single error enum shared by the metadata reporter, the statistics accumulator and
/// (optionally) the Polars adapter. An error never mutates a [`crate::profiling::StatisticsReport`].
#[derive(Debug, Error)]
pub enum ProfilingError {
    /// The requested column is not part of the dataset schema.
    #[error("column '{column}' does not exist in the dataset")]
    ColumnNotFound { column: String },

    /// The requested column exists but its declared type is not numeric.
    #[error("column '{column}' is not numeric (declared type {data_type})")]
    NotNumeric { column: String, data_type: DataType },

    /// The dataset has no rows, so rates and percentages are undefined.
    #[error("dataset has no rows")]
    EmptyDataset,

    /// The column has rows, but every value is null.
    #[error("column '{column}' has no non-null values")]
    NoData { column: String },

    /// A source value cannot be represented by [`crate::types::Value`].
    #[error("value at row {row} column '{column}' is out of range: {message}")]
    ValueOutOfRange {
        row: usize,
        column: String,
        message: String,
    },

    /// A report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "polars")]
    /// Polars error while reading a `DataFrame` (feature-gated behind `polars`).
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
