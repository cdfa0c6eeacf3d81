//! Column profiling: metadata, storage-type advice and descriptive statistics.
//!
//! - [`suggest_type`]: narrowest numeric type for an observed `[min, max]` range
//! - [`generate_metadata`]: one [`MetadataRow`] per column (null rate, cardinality, range, advice)
//! - [`describe_column`]: the full [`ColumnStatistics`] battery for one numeric column
//! - [`accumulate_statistics`]: append a column's [`StatisticsRow`] to a caller-owned
//!   [`StatisticsReport`]
//!
//! Diagnostics go to an optional [`ProfilingObserver`] configured through [`ProfilingOptions`].
//!
//! ## Example: metadata, then statistics for the interesting columns
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use rust_data_profiling::profiling::{
//!     generate_metadata_with_options, ProfilingOptions, StatisticsReport, TracingObserver,
//! };
//! use rust_data_profiling::types::{DataSet, DataType, Field, Schema, Value};
//!
//! # fn main() -> Result<(), rust_data_profiling::ProfilingError> {
//! let schema = Schema::new(vec![
//!     Field::new("age", DataType::Int64),
//!     Field::new("income", DataType::Float64),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Int64(31), Value::Float64(4_200.0)],
//!         vec![Value::Int64(45), Value::Null],
//!         vec![Value::Int64(27), Value::Float64(3_100.0)],
//!     ],
//! );
//!
//! let opts = ProfilingOptions {
//!     observer: Some(Arc::new(TracingObserver)),
//!     ..Default::default()
//! };
//!
//! let metadata = generate_metadata_with_options(&ds, &opts)?;
//! let mut report = StatisticsReport::new();
//! for row in metadata.iter().filter(|r| r.data_type.is_numeric()) {
//!     report.accumulate(&ds, &row.name, &row.name.to_uppercase(), &opts)?;
//! }
//! assert_eq!(report.len(), 2);
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod advisor;
pub mod metadata;
pub mod observer;
pub mod options;
pub mod report;
pub mod statistics;

pub use advisor::suggest_type;
pub use metadata::{
    estimate_memory, generate_metadata, generate_metadata_with_options, MemoryEstimate, MetadataRow,
};
pub use observer::{
    CompositeObserver, ProfilingContext, ProfilingObserver, ProfilingOperation, ProfilingSeverity,
    StdErrObserver, TracingObserver,
};
pub use options::ProfilingOptions;
pub use report::{
    accumulate_statistics, describe_column, ColumnStatistics, Quartiles, StatisticsReport,
    StatisticsRow,
};
pub use statistics::Mode;
