use std::fmt;
use std::sync::Arc;

use super::observer::{ProfilingObserver, ProfilingSeverity};

/// Options controlling profiling behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct ProfilingOptions {
    /// Optional observer for diagnostics/alerts.
    pub observer: Option<Arc<dyn ProfilingObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: ProfilingSeverity,
    /// Delta degrees of freedom for variance and standard deviation (`1` = sample statistics).
    pub ddof: u8,
}

impl fmt::Debug for ProfilingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfilingOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .field("ddof", &self.ddof)
            .finish()
    }
}

impl Default for ProfilingOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: ProfilingSeverity::Critical,
            ddof: 1,
        }
    }
}
