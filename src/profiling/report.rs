//! Descriptive statistics for one column, and the caller-owned report they accumulate into.
//!
//! [`describe_column`] computes the full [`ColumnStatistics`] battery for a column.
//! [`accumulate_statistics`] (or [`StatisticsReport::accumulate`]) additionally condenses it into
//! a [`StatisticsRow`] and appends that to a [`StatisticsReport`].

use std::fmt;

use serde::Serialize;

use crate::error::{ProfilingError, ProfilingResult};
use crate::processing::{reduce, reduce_count, ReduceOp};
use crate::types::{DataSet, Value};

use super::observer::{notify_failure, ProfilingContext};
use super::options::ProfilingOptions;
use super::statistics::{self, Mode};

/// First, second and third quartile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    /// 25th percentile.
    pub q1: f64,
    /// 50th percentile (the median).
    pub q2: f64,
    /// 75th percentile.
    pub q3: f64,
}

/// Full statistics battery for one numeric column, computed over its non-null values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStatistics {
    /// Column name.
    pub column: String,
    /// Rows in the dataset (including nulls).
    pub row_count: usize,
    /// Non-null values.
    pub count: usize,
    /// Distinct non-null values.
    pub distinct_count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (same as `quartiles.q2`).
    pub median: f64,
    /// Most frequent value(s), or why there are none.
    pub mode: Mode,
    /// Q1/Q2/Q3, linearly interpolated.
    pub quartiles: Quartiles,
    /// Smallest non-null value.
    pub min: f64,
    /// Largest non-null value.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    /// `None` when `count <= ddof`.
    pub variance: Option<f64>,
    /// `None` when `count <= ddof`.
    pub std_dev: Option<f64>,
    /// `std_dev / sqrt(row_count)`; null rows count towards the denominator.
    pub standard_error: Option<f64>,
    /// `std_dev / mean * 100`; `None` when the mean is zero.
    pub coefficient_of_variation: Option<f64>,
    /// `None` for fewer than 3 values.
    pub skewness: Option<f64>,
    /// Excess kurtosis; `None` for fewer than 4 values.
    pub kurtosis: Option<f64>,
    /// 90th percentile.
    pub p90: f64,
    /// 99th percentile.
    pub p99: f64,
}

impl ColumnStatistics {
    /// Condense into a report row labelled `display_name`.
    pub fn to_row(&self, display_name: impl Into<String>) -> StatisticsRow {
        StatisticsRow {
            variable: display_name.into(),
            mean: self.mean,
            std_dev: self.std_dev,
            skewness: self.skewness,
            kurtosis: self.kurtosis,
            min: self.min,
            p90: self.p90,
            p99: self.p99,
            max: self.max,
            range: self.range,
        }
    }
}

struct Opt(Option<f64>);

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("undefined"),
        }
    }
}

impl fmt::Display for ColumnStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------- Dataset ({}) -----------", self.column)?;
        writeln!(f, "rows: {}", self.row_count)?;
        writeln!(f, "distinct values: {}", self.distinct_count)?;

        writeln!(f, "----------- Position -----------")?;
        writeln!(f, "mean: {}", self.mean)?;
        writeln!(f, "median: {}", self.median)?;
        match &self.mode {
            Mode::AllUnique => writeln!(f, "no mode")?,
            Mode::UniformFrequency { .. } => {
                writeln!(f, "no mode, every value occurs with the same frequency")?
            }
            Mode::Values { values, frequency } => {
                writeln!(f, "mode: {values:?}")?;
                writeln!(f, "mode frequency: {frequency}")?;
            }
        }
        writeln!(f, "Q1 [25%]: {}", self.quartiles.q1)?;
        writeln!(f, "Q2 (median) [50%]: {}", self.quartiles.q2)?;
        writeln!(f, "Q3 [75%]: {}", self.quartiles.q3)?;

        writeln!(f, "----------- Dispersion -----------")?;
        writeln!(f, "max: {}", self.max)?;
        writeln!(f, "min: {}", self.min)?;
        writeln!(f, "range: {}", self.range)?;
        writeln!(f, "variance: {}", Opt(self.variance))?;
        writeln!(f, "standard deviation: {}", Opt(self.std_dev))?;
        writeln!(f, "standard error: {}", Opt(self.standard_error))?;
        writeln!(
            f,
            "coefficient of variation: {}",
            Opt(self.coefficient_of_variation)
        )?;

        writeln!(f, "----------- Shape -----------")?;
        writeln!(f, "skewness: {}", Opt(self.skewness))?;
        writeln!(f, "kurtosis: {}", Opt(self.kurtosis))
    }
}

/// One row of a [`StatisticsReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsRow {
    /// Display name given by the caller.
    pub variable: String,
    /// Arithmetic mean.
    pub mean: f64,
    /// Standard deviation; `None` when `count <= ddof`.
    pub std_dev: Option<f64>,
    /// Adjusted Fisher-Pearson skewness; `None` for fewer than 3 values.
    pub skewness: Option<f64>,
    /// Excess kurtosis; `None` for fewer than 4 values.
    pub kurtosis: Option<f64>,
    /// Smallest non-null value.
    pub min: f64,
    /// 90th percentile.
    pub p90: f64,
    /// 99th percentile.
    pub p99: f64,
    /// Largest non-null value.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
}

/// Append-only table of [`StatisticsRow`]s, in call order.
///
/// The report is owned by the caller; create one per session (or per test) and pass it to
/// [`accumulate_statistics`]. Failed calls never touch it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatisticsReport {
    rows: Vec<StatisticsRow>,
}

impl StatisticsReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every row.
    pub fn reset(&mut self) {
        self.rows.clear();
    }

    /// Append a row.
    pub fn push(&mut self, row: StatisticsRow) {
        self.rows.push(row);
    }

    /// Rows in call order.
    pub fn rows(&self) -> &[StatisticsRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when no row has been appended since creation or the last [`reset`](Self::reset).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most recently appended row.
    pub fn last(&self) -> Option<&StatisticsRow> {
        self.rows.last()
    }

    /// Serialize the report as a JSON array of rows.
    pub fn to_json(&self) -> ProfilingResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Compute statistics for `column` and append them as a row labelled `display_name`.
    ///
    /// See [`accumulate_statistics`].
    pub fn accumulate(
        &mut self,
        dataset: &DataSet,
        column: &str,
        display_name: &str,
        options: &ProfilingOptions,
    ) -> ProfilingResult<&Self> {
        accumulate_statistics(self, dataset, column, display_name, options)
    }
}

const HEADERS: [&str; 10] = [
    "variable", "mean", "std_dev", "skewness", "kurtosis", "min", "p90", "p99", "max", "range",
];

impl fmt::Display for StatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = |v: Option<f64>| v.map(|v| format!("{v:.4}")).unwrap_or_else(|| "-".to_string());
        let body: Vec<[String; 10]> = self
            .rows
            .iter()
            .map(|r| {
                [
                    r.variable.clone(),
                    cell(Some(r.mean)),
                    cell(r.std_dev),
                    cell(r.skewness),
                    cell(r.kurtosis),
                    cell(Some(r.min)),
                    cell(Some(r.p90)),
                    cell(Some(r.p99)),
                    cell(Some(r.max)),
                    cell(Some(r.range)),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &body {
            for (w, c) in widths.iter_mut().zip(row) {
                *w = (*w).max(c.len());
            }
        }

        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| format!("{h:>w$}"))
            .collect();
        writeln!(f, "{}", header.join(" | "))?;
        for row in &body {
            let line: Vec<String> = row
                .iter()
                .zip(widths)
                .map(|(c, w)| format!("{c:>w$}"))
                .collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}

/// Compute the full statistics battery for a numeric column.
///
/// Checks, in order:
///
/// 1. `column` exists, else [`ProfilingError::ColumnNotFound`]
/// 2. `column` is declared numeric, else [`ProfilingError::NotNumeric`]
/// 3. the dataset has rows, else [`ProfilingError::EmptyDataset`]
/// 4. the column has a non-null value, else [`ProfilingError::NoData`]
///
/// On success the configured observer receives the statistics (`on_statistics`).
pub fn describe_column(
    dataset: &DataSet,
    column: &str,
    options: &ProfilingOptions,
) -> ProfilingResult<ColumnStatistics> {
    let ctx = ProfilingContext::statistics(column);
    tracing::debug!(column, rows = dataset.row_count(), "describing column");

    let result = compute_statistics(dataset, column, options.ddof);
    match &result {
        Ok(stats) => {
            if let Some(obs) = options.observer.as_ref() {
                obs.on_statistics(&ctx, stats);
            }
        }
        Err(e) => notify_failure(options, &ctx, e),
    }
    result
}

/// Compute statistics for `column` and append them to `report` as a row labelled
/// `display_name`.
///
/// Returns the updated report. On error `report` is left unchanged.
///
/// # Examples
///
/// ```rust
/// use rust_data_profiling::profiling::{accumulate_statistics, ProfilingOptions, StatisticsReport};
/// use rust_data_profiling::types::{DataSet, DataType, Field, Schema, Value};
///
/// # fn main() -> Result<(), rust_data_profiling::ProfilingError> {
/// let schema = Schema::new(vec![Field::new("x", DataType::Int64)]);
/// let rows = (1..=5).map(|v| vec![Value::Int64(v)]).collect();
/// let ds = DataSet::new(schema, rows);
///
/// let mut report = StatisticsReport::new();
/// let opts = ProfilingOptions::default();
/// accumulate_statistics(&mut report, &ds, "x", "X", &opts)?;
/// let report = accumulate_statistics(&mut report, &ds, "x", "X again", &opts)?;
///
/// assert_eq!(report.len(), 2);
/// assert_eq!(report.rows()[0].mean, 3.0);
/// assert_eq!(report.rows()[0].range, 4.0);
/// # Ok(())
/// # }
/// ```
pub fn accumulate_statistics<'r>(
    report: &'r mut StatisticsReport,
    dataset: &DataSet,
    column: &str,
    display_name: &str,
    options: &ProfilingOptions,
) -> ProfilingResult<&'r StatisticsReport> {
    let stats = describe_column(dataset, column, options)?;
    report.push(stats.to_row(display_name));
    Ok(report)
}

fn compute_statistics(dataset: &DataSet, column: &str, ddof: u8) -> ProfilingResult<ColumnStatistics> {
    let idx = dataset
        .column_index(column)
        .ok_or_else(|| ProfilingError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let data_type = &dataset.schema.fields[idx].data_type;
    if !data_type.is_numeric() {
        return Err(ProfilingError::NotNumeric {
            column: column.to_string(),
            data_type: data_type.clone(),
        });
    }
    if dataset.row_count() == 0 {
        return Err(ProfilingError::EmptyDataset);
    }

    let values = dataset.numeric_values(idx);
    let no_data = || ProfilingError::NoData {
        column: column.to_string(),
    };
    let sorted = statistics::sorted_copy(&values);
    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return Err(no_data());
    };
    let quantile = |q: f64| statistics::quantile_sorted(&sorted, q).ok_or_else(no_data);

    let Some(Value::Float64(mean)) = reduce(dataset, column, ReduceOp::Mean) else {
        return Err(no_data());
    };
    let variance = statistics::variance(&values, ddof);
    let std_dev = variance.map(f64::sqrt);
    let row_count = reduce_count(dataset, column, ReduceOp::Count);

    Ok(ColumnStatistics {
        column: column.to_string(),
        row_count,
        count: values.len(),
        distinct_count: reduce_count(dataset, column, ReduceOp::DistinctCount),
        mean,
        median: quantile(0.5)?,
        mode: statistics::mode(&values).ok_or_else(no_data)?,
        quartiles: Quartiles {
            q1: quantile(0.25)?,
            q2: quantile(0.5)?,
            q3: quantile(0.75)?,
        },
        min,
        max,
        range: max - min,
        variance,
        std_dev,
        standard_error: std_dev.map(|sd| sd / (row_count as f64).sqrt()),
        coefficient_of_variation: std_dev
            .filter(|_| mean != 0.0)
            .map(|sd| sd / mean * 100.0),
        skewness: statistics::skewness(&values),
        kurtosis: statistics::kurtosis(&values),
        p90: quantile(0.90)?,
        p99: quantile(0.99)?,
    })
}
