//! Column reductions for [`crate::types::DataSet`].
//!
//! These are the per-column aggregates profiling builds on: counts, cardinality, and the
//! numeric extremes/mean over non-null values.

use crate::types::{DataSet, Value};

/// Built-in reduction operations over a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all rows (including nulls).
    Count,
    /// Count null cells (`Null` and `NaN`).
    NullCount,
    /// Count distinct non-null cells.
    DistinctCount,
    /// Minimum numeric value, ignoring nulls.
    Min,
    /// Maximum numeric value, ignoring nulls.
    Max,
    /// Arithmetic mean of numeric values, ignoring nulls.
    Mean,
}

/// Reduce a column using a built-in [`ReduceOp`].
///
/// - Returns `None` if `column` does not exist in the schema.
/// - `Count`/`NullCount`/`DistinctCount` always return `Some(Value::Int64(_))`.
/// - `Min`/`Max` keep the column's storage type (`Int64` for integer columns, `Float64` for float
///   columns). `Mean` is always `Float64`.
/// - For `Min`/`Max`/`Mean`, returns `Some(Value::Null)` if there are no non-null values or the
///   column is not numeric.
pub fn reduce(dataset: &DataSet, column: &str, op: ReduceOp) -> Option<Value> {
    let idx = dataset.schema.index_of(column)?;
    let field = dataset.schema.fields.get(idx)?;

    let out = match op {
        ReduceOp::Count => Value::Int64(dataset.row_count() as i64),
        ReduceOp::NullCount => Value::Int64(dataset.null_count(idx) as i64),
        ReduceOp::DistinctCount => Value::Int64(dataset.distinct_count(idx) as i64),
        ReduceOp::Min | ReduceOp::Max if field.data_type.is_integer() => {
            reduce_extreme_int(dataset, idx, op)
        }
        ReduceOp::Min | ReduceOp::Max if field.data_type.is_float() => {
            reduce_extreme_float(dataset, idx, op)
        }
        ReduceOp::Mean if field.data_type.is_numeric() => {
            let values = dataset.numeric_values(idx);
            if values.is_empty() {
                Value::Null
            } else {
                Value::Float64(values.iter().sum::<f64>() / values.len() as f64)
            }
        }
        ReduceOp::Min | ReduceOp::Max | ReduceOp::Mean => Value::Null,
    };
    Some(out)
}

/// Run a counting [`ReduceOp`] and read the result as `usize`.
///
/// Missing columns count as zero.
pub(crate) fn reduce_count(dataset: &DataSet, column: &str, op: ReduceOp) -> usize {
    match reduce(dataset, column, op) {
        Some(Value::Int64(n)) => usize::try_from(n).unwrap_or(0),
        _ => 0,
    }
}

fn reduce_extreme_int(dataset: &DataSet, idx: usize, op: ReduceOp) -> Value {
    let mut acc: Option<i64> = None;
    for value in dataset.column_values(idx) {
        if let Value::Int64(v) = value {
            acc = Some(match (op, acc) {
                (ReduceOp::Min, Some(a)) => a.min(*v),
                (ReduceOp::Max, Some(a)) => a.max(*v),
                (_, _) => *v,
            });
        }
    }
    acc.map(Value::Int64).unwrap_or(Value::Null)
}

fn reduce_extreme_float(dataset: &DataSet, idx: usize, op: ReduceOp) -> Value {
    let mut acc: Option<f64> = None;
    for v in dataset.numeric_values(idx) {
        acc = Some(match (op, acc) {
            (ReduceOp::Min, Some(a)) => a.min(v),
            (ReduceOp::Max, Some(a)) => a.max(v),
            (_, _) => v,
        });
    }
    acc.map(Value::Float64).unwrap_or(Value::Null)
}
