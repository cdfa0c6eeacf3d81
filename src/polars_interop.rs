//! Conversion from a Polars `DataFrame` into a [`DataSet`] (feature-gated behind `polars`).
//!
//! Column dtypes map onto [`DataType`] by width; dtypes without a counterpart become
//! [`DataType::Other`] carrying the Polars dtype name, with their cells rendered as strings.

use polars::prelude::{AnyValue, DataFrame, DataType as PolarsDataType};

use crate::error::{ProfilingError, ProfilingResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

impl DataSet {
    /// Build a [`DataSet`] from a Polars `DataFrame`.
    ///
    /// # Errors
    ///
    /// - [`ProfilingError::ValueOutOfRange`] for `UInt64` values above `i64::MAX`
    /// - [`ProfilingError::Polars`] if a cell cannot be read
    pub fn from_polars(df: &DataFrame) -> ProfilingResult<Self> {
        let columns = df.columns();
        let schema = Schema::new(
            columns
                .iter()
                .map(|c| Field::new(c.name().as_str(), map_dtype(c.dtype())))
                .collect(),
        );

        let mut rows: Vec<Vec<Value>> = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let mut out = Vec::with_capacity(columns.len());
            for column in columns {
                out.push(convert_any_value(column.name().as_str(), row, column.get(row)?)?);
            }
            rows.push(out);
        }

        Ok(DataSet::new(schema, rows))
    }
}

fn map_dtype(dtype: &PolarsDataType) -> DataType {
    match dtype {
        PolarsDataType::Int8 => DataType::Int8,
        PolarsDataType::Int16 => DataType::Int16,
        PolarsDataType::Int32 => DataType::Int32,
        PolarsDataType::Int64 => DataType::Int64,
        PolarsDataType::UInt8 => DataType::UInt8,
        PolarsDataType::UInt16 => DataType::UInt16,
        PolarsDataType::UInt32 => DataType::UInt32,
        PolarsDataType::UInt64 => DataType::UInt64,
        PolarsDataType::Float32 => DataType::Float32,
        PolarsDataType::Float64 => DataType::Float64,
        PolarsDataType::Boolean => DataType::Bool,
        PolarsDataType::String => DataType::Utf8,
        other => DataType::Other(other.to_string()),
    }
}

fn convert_any_value(column: &str, row: usize, value: AnyValue<'_>) -> ProfilingResult<Value> {
    let out = match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(v) => Value::Bool(v),
        AnyValue::Int8(v) => Value::Int64(v.into()),
        AnyValue::Int16(v) => Value::Int64(v.into()),
        AnyValue::Int32(v) => Value::Int64(v.into()),
        AnyValue::Int64(v) => Value::Int64(v),
        AnyValue::UInt8(v) => Value::Int64(v.into()),
        AnyValue::UInt16(v) => Value::Int64(v.into()),
        AnyValue::UInt32(v) => Value::Int64(v.into()),
        AnyValue::UInt64(v) => {
            Value::Int64(i64::try_from(v).map_err(|e| ProfilingError::ValueOutOfRange {
                row,
                column: column.to_string(),
                message: e.to_string(),
            })?)
        }
        AnyValue::Float32(v) => Value::Float64(v.into()),
        AnyValue::Float64(v) => Value::Float64(v),
        AnyValue::String(s) => Value::Utf8(s.to_string()),
        AnyValue::StringOwned(s) => Value::Utf8(s.to_string()),
        other => Value::Utf8(other.to_string()),
    };
    Ok(out)
}
