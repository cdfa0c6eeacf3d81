use std::fmt;
use std::sync::Arc;

use crate::error::ProfilingError;

use super::metadata::MetadataRow;
use super::options::ProfilingOptions;
use super::report::ColumnStatistics;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfilingSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (the input had nothing to profile).
    Warning,
    /// Error-level event (the request itself was invalid).
    Error,
    /// Critical error (the underlying data source failed).
    Critical,
}

impl ProfilingSeverity {
    /// Severity assigned to a profiling error.
    pub fn for_error(error: &ProfilingError) -> Self {
        match error {
            ProfilingError::EmptyDataset | ProfilingError::NoData { .. } => Self::Warning,
            ProfilingError::ColumnNotFound { .. }
            | ProfilingError::NotNumeric { .. }
            | ProfilingError::ValueOutOfRange { .. } => Self::Error,
            ProfilingError::Serialization(_) => Self::Critical,
            #[cfg(feature = "polars")]
            ProfilingError::Polars(_) => Self::Critical,
        }
    }
}

/// Which profiling operation an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingOperation {
    /// [`super::generate_metadata`].
    Metadata,
    /// [`super::describe_column`] / [`super::accumulate_statistics`].
    Statistics,
}

/// Context about a profiling call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilingContext {
    /// Operation being run.
    pub operation: ProfilingOperation,
    /// Target column, for per-column operations.
    pub column: Option<String>,
}

impl ProfilingContext {
    pub(crate) fn metadata() -> Self {
        Self {
            operation: ProfilingOperation::Metadata,
            column: None,
        }
    }

    pub(crate) fn statistics(column: &str) -> Self {
        Self {
            operation: ProfilingOperation::Statistics,
            column: Some(column.to_string()),
        }
    }
}

/// Observer interface for profiling outcomes.
///
/// This is the diagnostic channel: implementors can print the computed statistics, record
/// metrics, or trigger alerts. None of it is part of the programmatic results.
pub trait ProfilingObserver: Send + Sync {
    /// Called when column metadata has been generated.
    fn on_metadata(&self, _ctx: &ProfilingContext, _rows: &[MetadataRow]) {}

    /// Called when the statistics battery for a column has been computed.
    fn on_statistics(&self, _ctx: &ProfilingContext, _stats: &ColumnStatistics) {}

    /// Called when a profiling call fails.
    fn on_failure(&self, _ctx: &ProfilingContext, _severity: ProfilingSeverity, _error: &ProfilingError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &ProfilingContext, severity: ProfilingSeverity, error: &ProfilingError) {
        self.on_failure(ctx, severity, error)
    }
}

pub(crate) fn notify_failure(options: &ProfilingOptions, ctx: &ProfilingContext, error: &ProfilingError) {
    if let Some(obs) = options.observer.as_ref() {
        let severity = ProfilingSeverity::for_error(error);
        obs.on_failure(ctx, severity, error);
        if severity >= options.alert_at_or_above {
            obs.on_alert(ctx, severity, error);
        }
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ProfilingObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ProfilingObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ProfilingObserver for CompositeObserver {
    fn on_metadata(&self, ctx: &ProfilingContext, rows: &[MetadataRow]) {
        for o in &self.observers {
            o.on_metadata(ctx, rows);
        }
    }

    fn on_statistics(&self, ctx: &ProfilingContext, stats: &ColumnStatistics) {
        for o in &self.observers {
            o.on_statistics(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &ProfilingContext, severity: ProfilingSeverity, error: &ProfilingError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &ProfilingContext, severity: ProfilingSeverity, error: &ProfilingError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Prints the human-readable statistic lines and failures to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ProfilingObserver for StdErrObserver {
    fn on_metadata(&self, _ctx: &ProfilingContext, rows: &[MetadataRow]) {
        for row in rows {
            eprintln!("[profile][metadata] {row}");
        }
    }

    fn on_statistics(&self, _ctx: &ProfilingContext, stats: &ColumnStatistics) {
        eprint!("{stats}");
    }

    fn on_failure(&self, ctx: &ProfilingContext, severity: ProfilingSeverity, error: &ProfilingError) {
        eprintln!(
            "[profile][{:?}] op={:?} column={} err={}",
            severity,
            ctx.operation,
            ctx.column.as_deref().unwrap_or("-"),
            error
        );
    }

    fn on_alert(&self, ctx: &ProfilingContext, severity: ProfilingSeverity, error: &ProfilingError) {
        eprintln!(
            "[ALERT][profile][{:?}] op={:?} column={} err={}",
            severity,
            ctx.operation,
            ctx.column.as_deref().unwrap_or("-"),
            error
        );
    }
}

/// Emits profiling events through the `tracing` crate.
///
/// The library never installs a subscriber; callers wire one up (e.g. `tracing-subscriber`).
#[derive(Debug, Default)]
pub struct TracingObserver;

impl ProfilingObserver for TracingObserver {
    fn on_metadata(&self, _ctx: &ProfilingContext, rows: &[MetadataRow]) {
        tracing::info!(columns = rows.len(), "column metadata generated");
        for row in rows {
            tracing::debug!(
                column = %row.name,
                data_type = %row.data_type,
                null_count = row.null_count,
                null_percentage = row.null_percentage,
                cardinality = row.cardinality,
                suggested_type = row.suggested_type.as_ref().map(|t| t.name()),
                "column metadata"
            );
        }
    }

    fn on_statistics(&self, _ctx: &ProfilingContext, stats: &ColumnStatistics) {
        tracing::info!(
            column = %stats.column,
            rows = stats.row_count,
            count = stats.count,
            distinct = stats.distinct_count,
            mean = stats.mean,
            median = stats.median,
            min = stats.min,
            max = stats.max,
            std_dev = stats.std_dev,
            skewness = stats.skewness,
            kurtosis = stats.kurtosis,
            "column statistics computed"
        );
    }

    fn on_failure(&self, ctx: &ProfilingContext, severity: ProfilingSeverity, error: &ProfilingError) {
        let column = ctx.column.as_deref().unwrap_or("-");
        match severity {
            ProfilingSeverity::Info => tracing::info!(op = ?ctx.operation, column, %error, "profiling failed"),
            ProfilingSeverity::Warning => tracing::warn!(op = ?ctx.operation, column, %error, "profiling failed"),
            ProfilingSeverity::Error | ProfilingSeverity::Critical => {
                tracing::error!(op = ?ctx.operation, column, ?severity, %error, "profiling failed")
            }
        }
    }

    fn on_alert(&self, ctx: &ProfilingContext, severity: ProfilingSeverity, error: &ProfilingError) {
        tracing::error!(
            op = ?ctx.operation,
            column = ctx.column.as_deref().unwrap_or("-"),
            ?severity,
            %error,
            "profiling alert"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::ProfilingSeverity;
    use crate::error::ProfilingError;
    use crate::types::DataType;

    #[test]
    fn severity_classification() {
        assert_eq!(
            ProfilingSeverity::for_error(&ProfilingError::EmptyDataset),
            ProfilingSeverity::Warning
        );
        assert_eq!(
            ProfilingSeverity::for_error(&ProfilingError::NotNumeric {
                column: "name".to_string(),
                data_type: DataType::Utf8,
            }),
            ProfilingSeverity::Error
        );
        assert!(ProfilingSeverity::Critical > ProfilingSeverity::Error);
    }
}
