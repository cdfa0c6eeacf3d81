//! `rust-data-profiling` computes column-level metadata and descriptive statistics over an
//! in-memory [`types::DataSet`], for exploratory analysis and memory-footprint triage.
//!
//! ## What it computes
//!
//! - **Storage-type advice** ([`profiling::suggest_type`]): the narrowest integer/float type that
//!   losslessly holds a column's observed range (`int64` with values in `0..=200` → `uint8`,
//!   `float64` → `float32`).
//! - **Column metadata** ([`profiling::generate_metadata`]): per column, the declared type, null
//!   count and percentage, cardinality, observed min/max and the suggested type, sorted by type
//!   name.
//! - **Descriptive statistics** ([`profiling::describe_column`],
//!   [`profiling::accumulate_statistics`]): mean, median, mode, quartiles, dispersion and shape
//!   for one numeric column, appended to a caller-owned [`profiling::StatisticsReport`].
//!
//! **Schema + value types:**
//!
//! A [`types::DataSet`] carries a [`types::Schema`] of typed [`types::Field`]s. Whether a column
//! is numeric is decided by its declared [`types::DataType`], never by inspecting values.
//! [`types::Value::Null`] and `NaN` floats count as nulls.
//!
//! ## Quick example
//!
//! ```rust
//! use rust_data_profiling::profiling::{
//!     accumulate_statistics, generate_metadata, ProfilingOptions, StatisticsReport,
//! };
//! use rust_data_profiling::types::{DataSet, DataType, Field, Schema, Value};
//!
//! # fn main() -> Result<(), rust_data_profiling::ProfilingError> {
//! let schema = Schema::new(vec![
//!     Field::new("id", DataType::Int64),
//!     Field::new("score", DataType::Float64),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Int64(1), Value::Float64(10.0)],
//!         vec![Value::Int64(2), Value::Null],
//!         vec![Value::Int64(3), Value::Float64(20.0)],
//!     ],
//! );
//!
//! let metadata = generate_metadata(&ds)?;
//! assert_eq!(metadata[0].name, "score");
//! assert_eq!(metadata[0].null_percentage, 33.33);
//!
//! let mut report = StatisticsReport::new();
//! accumulate_statistics(&mut report, &ds, "score", "Score", &ProfilingOptions::default())?;
//! assert_eq!(report.rows()[0].mean, 15.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`profiling`]: type advice, metadata, statistics and the report accumulator
//! - [`processing`]: per-column reductions the profiling layer is built on
//! - [`types`]: schema + in-memory dataset types
//! - [`error`]: error types used across profiling
//!
//! With the `polars` feature, `DataSet::from_polars` converts a Polars `DataFrame`.

pub mod error;
#[cfg(feature = "polars")]
pub mod polars_interop;
pub mod processing;
pub mod profiling;
pub mod types;

pub use error::{ProfilingError, ProfilingResult};
