use rust_data_profiling::profiling::{
    accumulate_statistics, describe_column, Mode, ProfilingOptions, StatisticsReport,
};
use rust_data_profiling::types::{DataSet, DataType, Field, Schema, Value};
use rust_data_profiling::ProfilingError;

fn measurements() -> DataSet {
    let schema = Schema::new(vec![
        Field::new("x", DataType::Int64),
        Field::new("weight", DataType::Float32),
        Field::new("city", DataType::Utf8),
    ]);

    let rows = vec![
        vec![Value::Int64(1), Value::Float64(2.0), Value::Utf8("Lisbon".to_string())],
        vec![Value::Int64(2), Value::Float64(2.0), Value::Utf8("Porto".to_string())],
        vec![Value::Int64(3), Value::Null, Value::Utf8("Lisbon".to_string())],
        vec![Value::Int64(4), Value::Float64(5.0), Value::Null],
        vec![Value::Int64(5), Value::Float64(9.0), Value::Utf8("Braga".to_string())],
    ];

    DataSet::new(schema, rows)
}

#[test]
fn one_to_five_summary() {
    let mut report = StatisticsReport::new();
    let report = accumulate_statistics(
        &mut report,
        &measurements(),
        "x",
        "X",
        &ProfilingOptions::default(),
    )
    .unwrap();

    assert_eq!(report.len(), 1);
    let row = &report.rows()[0];
    assert_eq!(row.variable, "X");
    assert_eq!(row.mean, 3.0);
    assert_eq!(row.min, 1.0);
    assert_eq!(row.max, 5.0);
    assert_eq!(row.range, 4.0);
    assert!((row.std_dev.unwrap() - 2.5f64.sqrt()).abs() < 1e-12);
}

#[test]
fn missing_column_leaves_report_unchanged() {
    let ds = measurements();
    let opts = ProfilingOptions::default();
    let mut report = StatisticsReport::new();
    accumulate_statistics(&mut report, &ds, "x", "X", &opts).unwrap();
    let before = report.clone();

    let err = accumulate_statistics(&mut report, &ds, "nope", "Nope", &opts).unwrap_err();
    assert!(matches!(err, ProfilingError::ColumnNotFound { .. }));
    assert_eq!(err.to_string(), "column 'nope' does not exist in the dataset");
    assert_eq!(report, before);
}

#[test]
fn non_numeric_column_is_rejected() {
    let mut report = StatisticsReport::new();
    let err = accumulate_statistics(
        &mut report,
        &measurements(),
        "city",
        "City",
        &ProfilingOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ProfilingError::NotNumeric { .. }));
    assert!(err.to_string().contains("declared type utf8"));
    assert!(report.is_empty());
}

#[test]
fn same_column_twice_appends_two_rows() {
    let ds = measurements();
    let opts = ProfilingOptions::default();
    let mut report = StatisticsReport::new();

    for expected in 1..=3 {
        accumulate_statistics(&mut report, &ds, "x", "X", &opts).unwrap();
        assert_eq!(report.len(), expected);
    }
    assert_eq!(report.rows()[0], report.rows()[2]);
}

#[test]
fn independent_reports_do_not_share_rows() {
    let ds = measurements();
    let opts = ProfilingOptions::default();
    let mut a = StatisticsReport::new();
    let mut b = StatisticsReport::new();

    a.accumulate(&ds, "x", "X", &opts).unwrap();
    a.accumulate(&ds, "weight", "Weight", &opts).unwrap();
    b.accumulate(&ds, "weight", "Weight", &opts).unwrap();

    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 1);
    assert_eq!(a.rows()[1], b.rows()[0]);
}

#[test]
fn nulls_are_excluded_from_statistics() {
    let stats = describe_column(&measurements(), "weight", &ProfilingOptions::default()).unwrap();
    assert_eq!(stats.row_count, 5);
    assert_eq!(stats.count, 4);
    assert_eq!(stats.distinct_count, 3);
    assert_eq!(stats.mean, 4.5);
    assert_eq!(stats.median, 3.5);
    assert_eq!(
        stats.mode,
        Mode::Values {
            values: vec![2.0],
            frequency: 2
        }
    );
    assert_eq!(stats.min, 2.0);
    assert_eq!(stats.max, 9.0);
    assert_eq!(stats.range, 7.0);
    assert_eq!(stats.variance, Some(11.0));
    // Null rows still count towards the standard error denominator.
    assert!((stats.standard_error.unwrap() - 11f64.sqrt() / 5f64.sqrt()).abs() < 1e-12);
}

#[test]
fn standard_error_divides_by_dataset_row_count() {
    let schema = Schema::new(vec![Field::new("v", DataType::Float64)]);
    let rows = vec![
        vec![Value::Float64(2.0)],
        vec![Value::Float64(2.0)],
        vec![Value::Float64(f64::NAN)],
        vec![Value::Float64(5.0)],
        vec![Value::Float64(9.0)],
    ];
    let stats = describe_column(&DataSet::new(schema, rows), "v", &ProfilingOptions::default())
        .unwrap();

    assert_eq!(stats.row_count, 5);
    assert_eq!(stats.count, 4);
    let sd = stats.std_dev.unwrap();
    assert!((stats.standard_error.unwrap() - sd / 5f64.sqrt()).abs() < 1e-12);
    assert!((stats.standard_error.unwrap() - 1.483_239_697_419_132_4).abs() < 1e-12);
}

#[test]
fn zero_row_dataset_reports_empty_dataset() {
    let ds = DataSet::new(measurements().schema, vec![]);
    let mut report = StatisticsReport::new();
    let err = accumulate_statistics(&mut report, &ds, "x", "X", &ProfilingOptions::default())
        .unwrap_err();
    assert!(matches!(err, ProfilingError::EmptyDataset));
    assert!(report.is_empty());
}
