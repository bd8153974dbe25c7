//! JSON trace output for the engine crates, behind the `trace` feature.

use std::path::Path;

/// File created in the host's log directory.
pub const TRACE_FILE_NAME: &str = "predict-trace.jsonl";

/// Used when `RUST_LOG` is unset.
#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "predict_engine=debug,predict_core=debug";

/// Send span-close and event records to `<log_dir>/predict-trace.jsonl`.
///
/// Returns `true` only for the call that installed the subscriber. Later
/// calls, and hosts that already set a global subscriber, get `false`.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> bool {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();
    let mut installed = false;
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE_NAME);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // Flushed on drop; the engine lives as long as the process.
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        installed = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init()
            .is_ok();
    });
    installed
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> bool {
    false
}
