use rust_data_profiling::profiling::{estimate_memory, generate_metadata};
use rust_data_profiling::types::{DataSet, DataType, Field, Schema, Value};
use rust_data_profiling::ProfilingError;

fn people_dataset() -> DataSet {
    let schema = Schema::new(vec![
        Field::new("name", DataType::Utf8),
        Field::new("age", DataType::Int64),
        Field::new("score", DataType::Float64),
        Field::new("active", DataType::Bool),
        Field::new("visits", DataType::Int64),
        Field::new("bonus", DataType::Float64),
    ]);

    let rows = vec![
        vec![
            Value::Utf8("Ada".to_string()),
            Value::Int64(36),
            Value::Float64(98.5),
            Value::Bool(true),
            Value::Int64(1_000),
            Value::Null,
        ],
        vec![
            Value::Utf8("Grace".to_string()),
            Value::Int64(45),
            Value::Null,
            Value::Bool(false),
            Value::Int64(0),
            Value::Null,
        ],
        vec![
            Value::Utf8("Alan".to_string()),
            Value::Int64(41),
            Value::Float64(77.0),
            Value::Bool(true),
            Value::Int64(1_000),
            Value::Null,
        ],
        vec![
            Value::Utf8("Ada".to_string()),
            Value::Int64(36),
            Value::Float64(64.25),
            Value::Null,
            Value::Int64(12),
            Value::Null,
        ],
    ];

    DataSet::new(schema, rows)
}

#[test]
fn one_row_per_column_sorted_by_type_name() {
    let ds = people_dataset();
    let rows = generate_metadata(&ds).unwrap();

    assert_eq!(rows.len(), ds.column_count());
    let order: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.data_type.name(), r.name.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("bool", "active"),
            ("float64", "score"),
            ("float64", "bonus"),
            ("int64", "age"),
            ("int64", "visits"),
            ("utf8", "name"),
        ]
    );
}

#[test]
fn fully_populated_column_has_zero_null_percentage() {
    let rows = generate_metadata(&people_dataset()).unwrap();
    let age = rows.iter().find(|r| r.name == "age").unwrap();
    assert_eq!(age.null_count, 0);
    assert_eq!(age.null_percentage, 0.0);
    assert_eq!(age.cardinality, 3);
    assert_eq!(age.min, Some(Value::Int64(36)));
    assert_eq!(age.max, Some(Value::Int64(45)));
    assert_eq!(age.suggested_type, Some(DataType::UInt8));

    let visits = rows.iter().find(|r| r.name == "visits").unwrap();
    assert_eq!(visits.suggested_type, Some(DataType::UInt16));
}

#[test]
fn all_null_numeric_column_has_no_range() {
    let rows = generate_metadata(&people_dataset()).unwrap();
    let bonus = rows.iter().find(|r| r.name == "bonus").unwrap();
    assert_eq!(bonus.null_count, 4);
    assert_eq!(bonus.null_percentage, 100.0);
    assert_eq!(bonus.cardinality, 0);
    assert_eq!(bonus.min, None);
    assert_eq!(bonus.max, None);
    assert_eq!(bonus.suggested_type, None);
}

#[test]
fn partially_null_columns_report_percentages() {
    let rows = generate_metadata(&people_dataset()).unwrap();
    let score = rows.iter().find(|r| r.name == "score").unwrap();
    assert_eq!(score.null_percentage, 25.0);
    assert_eq!(score.min, Some(Value::Float64(64.25)));
    assert_eq!(score.max, Some(Value::Float64(98.5)));
    assert_eq!(score.suggested_type, Some(DataType::Float32));

    let active = rows.iter().find(|r| r.name == "active").unwrap();
    assert_eq!(active.null_percentage, 25.0);
    assert_eq!(active.cardinality, 2);
    assert_eq!(active.suggested_type, None);

    let name = rows.iter().find(|r| r.name == "name").unwrap();
    assert_eq!(name.cardinality, 3);
    assert_eq!(name.min, None);
}

#[test]
fn metadata_is_idempotent() {
    let ds = people_dataset();
    let first = generate_metadata(&ds).unwrap();
    let second = generate_metadata(&ds).unwrap();
    assert_eq!(first, second);
}

#[test]
fn zero_row_dataset_is_rejected() {
    let ds = DataSet::new(people_dataset().schema, vec![]);
    let err = generate_metadata(&ds).unwrap_err();
    assert!(matches!(err, ProfilingError::EmptyDataset));
    assert_eq!(err.to_string(), "dataset has no rows");
}

#[test]
fn metadata_serializes_type_names_as_strings() {
    let rows = generate_metadata(&people_dataset()).unwrap();
    let json = serde_json::to_value(&rows).unwrap();
    let age = json
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["name"] == "age")
        .unwrap();
    assert_eq!(age["data_type"], "int64");
    assert_eq!(age["suggested_type"], "uint8");
    assert_eq!(age["min"], 36);
}

#[test]
fn memory_estimate_reflects_suggestions() {
    let ds = people_dataset();
    let rows = generate_metadata(&ds).unwrap();
    let est = estimate_memory(&rows, ds.row_count());

    // bool 1, score 8->4, bonus 8 (no suggestion), age 8->1, visits 8->2.
    assert_eq!(est.current_bytes, (1 + 8 + 8 + 8 + 8) * 4);
    assert_eq!(est.suggested_bytes, (1 + 4 + 8 + 1 + 2) * 4);
    assert_eq!(est.bytes_saved(), 17 * 4);
}
