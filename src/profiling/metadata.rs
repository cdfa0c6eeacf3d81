//! Per-column metadata: declared type, null rate, cardinality, observed range and storage-type
//! advice.

use std::fmt;

use serde::Serialize;

use crate::error::{ProfilingError, ProfilingResult};
use crate::processing::{reduce, reduce_count, ReduceOp};
use crate::types::{DataSet, DataType, Field, Value};

use super::advisor::suggest_type;
use super::observer::{notify_failure, ProfilingContext};
use super::options::ProfilingOptions;

/// Summary of one column of a [`DataSet`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRow {
    /// Column name.
    pub name: String,
    /// Declared type.
    pub data_type: DataType,
    /// Number of null cells.
    pub null_count: usize,
    /// Null cells as a percentage of rows, rounded to 2 decimals.
    pub null_percentage: f64,
    /// Number of distinct non-null values.
    pub cardinality: usize,
    /// Smallest non-null value (numeric columns only).
    pub min: Option<Value>,
    /// Largest non-null value (numeric columns only).
    pub max: Option<Value>,
    /// Narrowest type able to hold `[min, max]` (numeric columns with data only).
    pub suggested_type: Option<DataType>,
}

impl fmt::Display for MetadataRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={} type={} nulls={} ({}%) cardinality={} min={} max={} suggested={}",
            self.name,
            self.data_type,
            self.null_count,
            self.null_percentage,
            self.cardinality,
            self.min.as_ref().unwrap_or(&Value::Null),
            self.max.as_ref().unwrap_or(&Value::Null),
            self.suggested_type.as_ref().map(DataType::name).unwrap_or("-"),
        )
    }
}

/// Generate one [`MetadataRow`] per column, using default options.
///
/// See [`generate_metadata_with_options`].
pub fn generate_metadata(dataset: &DataSet) -> ProfilingResult<Vec<MetadataRow>> {
    generate_metadata_with_options(dataset, &ProfilingOptions::default())
}

/// Generate one [`MetadataRow`] per column.
///
/// Rows are sorted by declared type name; columns sharing a type keep their schema order.
///
/// # Errors
///
/// Returns [`ProfilingError::EmptyDataset`] if the dataset has no rows.
///
/// # Examples
///
/// ```rust
/// use rust_data_profiling::profiling::generate_metadata;
/// use rust_data_profiling::types::{DataSet, DataType, Field, Schema, Value};
///
/// # fn main() -> Result<(), rust_data_profiling::ProfilingError> {
/// let schema = Schema::new(vec![
///     Field::new("name", DataType::Utf8),
///     Field::new("age", DataType::Int64),
/// ]);
/// let ds = DataSet::new(
///     schema,
///     vec![
///         vec![Value::Utf8("Ada".to_string()), Value::Int64(36)],
///         vec![Value::Null, Value::Int64(41)],
///     ],
/// );
///
/// let rows = generate_metadata(&ds)?;
/// assert_eq!(rows[0].name, "age");
/// assert_eq!(rows[0].suggested_type, Some(DataType::UInt8));
/// assert_eq!(rows[1].null_percentage, 50.0);
/// # Ok(())
/// # }
/// ```
pub fn generate_metadata_with_options(
    dataset: &DataSet,
    options: &ProfilingOptions,
) -> ProfilingResult<Vec<MetadataRow>> {
    let ctx = ProfilingContext::metadata();
    tracing::debug!(
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "generating column metadata"
    );

    let result = build_metadata(dataset);
    match &result {
        Ok(rows) => {
            if let Some(obs) = options.observer.as_ref() {
                obs.on_metadata(&ctx, rows);
            }
        }
        Err(e) => notify_failure(options, &ctx, e),
    }
    result
}

fn build_metadata(dataset: &DataSet) -> ProfilingResult<Vec<MetadataRow>> {
    let row_count = dataset.row_count();
    if row_count == 0 {
        return Err(ProfilingError::EmptyDataset);
    }

    let mut rows: Vec<MetadataRow> = dataset
        .schema
        .fields
        .iter()
        .map(|field| column_metadata(dataset, field, row_count))
        .collect();

    // `sort_by` is stable, so columns of the same type keep schema order.
    rows.sort_by(|a, b| a.data_type.name().cmp(b.data_type.name()));
    Ok(rows)
}

fn column_metadata(dataset: &DataSet, field: &Field, row_count: usize) -> MetadataRow {
    let null_count = reduce_count(dataset, &field.name, ReduceOp::NullCount);

    let (min, max, suggested_type) = if field.data_type.is_numeric() {
        let min = observed(reduce(dataset, &field.name, ReduceOp::Min));
        let max = observed(reduce(dataset, &field.name, ReduceOp::Max));
        let suggested = match (
            min.as_ref().and_then(Value::as_f64),
            max.as_ref().and_then(Value::as_f64),
        ) {
            (Some(lo), Some(hi)) => Some(suggest_type(lo, hi, &field.data_type)),
            _ => None,
        };
        (min, max, suggested)
    } else {
        (None, None, None)
    };

    MetadataRow {
        name: field.name.clone(),
        data_type: field.data_type.clone(),
        null_count,
        null_percentage: round2(null_count as f64 / row_count as f64 * 100.0),
        cardinality: reduce_count(dataset, &field.name, ReduceOp::DistinctCount),
        min,
        max,
        suggested_type,
    }
}

fn observed(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !v.is_null())
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Estimated in-memory footprint of fixed-width columns, as declared vs. as suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryEstimate {
    /// Bytes used by the declared types.
    pub current_bytes: usize,
    /// Bytes the suggested types would use.
    pub suggested_bytes: usize,
}

impl MemoryEstimate {
    /// Bytes saved by switching to the suggested types.
    pub fn bytes_saved(&self) -> usize {
        self.current_bytes.saturating_sub(self.suggested_bytes)
    }
}

/// Estimate the value-buffer footprint of `rows` for a dataset with `row_count` rows.
///
/// Variable-width columns (strings, other types) are not counted. Columns without a suggestion
/// count at their declared width on both sides.
pub fn estimate_memory(rows: &[MetadataRow], row_count: usize) -> MemoryEstimate {
    rows.iter()
        .filter_map(|row| {
            let current = row.data_type.byte_width()?;
            let suggested = row
                .suggested_type
                .as_ref()
                .and_then(DataType::byte_width)
                .unwrap_or(current);
            Some((current * row_count, suggested * row_count))
        })
        .fold(
            MemoryEstimate {
                current_bytes: 0,
                suggested_bytes: 0,
            },
            |acc, (current, suggested)| MemoryEstimate {
                current_bytes: acc.current_bytes + current,
                suggested_bytes: acc.suggested_bytes + suggested,
            },
        )
}
