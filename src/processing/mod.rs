//! In-memory column aggregates.
//!
//! The processing layer operates on [`crate::types::DataSet`] values and exposes the per-column
//! aggregates that [`crate::profiling`] is built from.
//!
//! Currently implemented:
//!
//! - [`reduce()`]: common reductions (count/null count/distinct count/min/max/mean)
//!
//! ## Example
//!
//! ```rust
//! use rust_data_profiling::processing::{reduce, ReduceOp};
//! use rust_data_profiling::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![Field::new("score", DataType::Float64)]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Float64(10.0)],
//!         vec![Value::Null],
//!         vec![Value::Float64(20.0)],
//!     ],
//! );
//!
//! // Nulls are ignored by the numeric reductions.
//! assert_eq!(reduce(&ds, "score", ReduceOp::Mean), Some(Value::Float64(15.0)));
//! assert_eq!(reduce(&ds, "score", ReduceOp::NullCount), Some(Value::Int64(1)));
//! ```

pub mod reduce;

pub use reduce::{reduce, ReduceOp};
pub(crate) use reduce::reduce_count;
