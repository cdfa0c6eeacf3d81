//! Storage-type advice.
//!
//! Given a column's observed range and declared type, [`suggest_type`] recommends the narrowest
//! type that still represents every observed value losslessly.

use crate::types::DataType;

const UNSIGNED_BUCKETS: [(f64, DataType); 3] = [
    (u8::MAX as f64, DataType::UInt8),
    (u16::MAX as f64, DataType::UInt16),
    (u32::MAX as f64, DataType::UInt32),
];

const SIGNED_BUCKETS: [(f64, f64, DataType); 3] = [
    (i8::MIN as f64, i8::MAX as f64, DataType::Int8),
    (i16::MIN as f64, i16::MAX as f64, DataType::Int16),
    (i32::MIN as f64, i32::MAX as f64, DataType::Int32),
];

/// Recommend an economical storage type for a column.
///
/// - Integer types: non-negative ranges pick the smallest of `uint8`/`uint16`/`uint32` that holds
///   `max_value`; ranges with negatives pick the smallest of `int8`/`int16`/`int32` that contains
///   `[min_value, max_value]`. Anything wider falls back to `int64`, whatever the sign.
/// - Float types: `float64` narrows to `float32`; other float widths are returned unchanged.
/// - Any other type is returned unchanged.
///
/// ```rust
/// use rust_data_profiling::profiling::suggest_type;
/// use rust_data_profiling::types::DataType;
///
/// assert_eq!(suggest_type(0.0, 200.0, &DataType::Int64), DataType::UInt8);
/// assert_eq!(suggest_type(-100.0, 100.0, &DataType::Int64), DataType::Int8);
/// assert_eq!(suggest_type(-1e12, 1e12, &DataType::Float64), DataType::Float32);
/// ```
pub fn suggest_type(min_value: f64, max_value: f64, original_type: &DataType) -> DataType {
    if original_type.is_integer() {
        let bucket = if min_value >= 0.0 {
            UNSIGNED_BUCKETS
                .iter()
                .find(|(upper, _)| max_value <= *upper)
                .map(|(_, dt)| dt)
        } else {
            SIGNED_BUCKETS
                .iter()
                .find(|(lower, upper, _)| *lower <= min_value && max_value <= *upper)
                .map(|(_, _, dt)| dt)
        };
        return bucket.cloned().unwrap_or(DataType::Int64);
    }

    match original_type {
        DataType::Float64 => DataType::Float32,
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::suggest_type;
    use crate::types::DataType;

    #[test]
    fn unsigned_buckets_pick_smallest_width() {
        assert_eq!(suggest_type(0.0, 0.0, &DataType::Int64), DataType::UInt8);
        assert_eq!(suggest_type(0.0, 200.0, &DataType::Int64), DataType::UInt8);
        assert_eq!(suggest_type(0.0, 255.0, &DataType::Int32), DataType::UInt8);
        assert_eq!(suggest_type(0.0, 256.0, &DataType::Int32), DataType::UInt16);
        assert_eq!(suggest_type(0.0, 1000.0, &DataType::Int64), DataType::UInt16);
        assert_eq!(suggest_type(10.0, 65_536.0, &DataType::Int64), DataType::UInt32);
        assert_eq!(
            suggest_type(0.0, 4_294_967_295.0, &DataType::Int64),
            DataType::UInt32
        );
    }

    #[test]
    fn signed_buckets_must_contain_whole_range() {
        assert_eq!(suggest_type(-100.0, 100.0, &DataType::Int64), DataType::Int8);
        assert_eq!(suggest_type(-128.0, 127.0, &DataType::Int64), DataType::Int8);
        assert_eq!(suggest_type(-1.0, 128.0, &DataType::Int64), DataType::Int16);
        assert_eq!(suggest_type(-129.0, 0.0, &DataType::Int64), DataType::Int16);
        assert_eq!(suggest_type(-40_000.0, 5.0, &DataType::Int64), DataType::Int32);
        assert_eq!(
            suggest_type(-1.0, 2_147_483_647.0, &DataType::Int64),
            DataType::Int32
        );
    }

    #[test]
    fn out_of_range_integers_fall_back_to_int64() {
        assert_eq!(suggest_type(-5e9, 0.0, &DataType::Int64), DataType::Int64);
        assert_eq!(suggest_type(-1.0, 3e9, &DataType::Int32), DataType::Int64);
        assert_eq!(suggest_type(0.0, 5e9, &DataType::UInt64), DataType::Int64);
    }

    #[test]
    fn float64_always_narrows_to_float32() {
        assert_eq!(suggest_type(0.0, 1.0, &DataType::Float64), DataType::Float32);
        assert_eq!(suggest_type(-1e300, 1e300, &DataType::Float64), DataType::Float32);
        assert_eq!(suggest_type(0.0, 1.0, &DataType::Float32), DataType::Float32);
    }

    #[test]
    fn other_types_are_returned_unchanged() {
        assert_eq!(suggest_type(0.0, 1.0, &DataType::Bool), DataType::Bool);
        let date = DataType::Other("date".to_string());
        assert_eq!(suggest_type(0.0, 1.0, &date), date);
        assert_eq!(suggest_type(0.0, 1.0, &date).name(), "date");
    }
}
