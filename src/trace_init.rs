#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Default `EnvFilter` directive for the `debug` setting.
pub fn log_filter(debug: bool) -> &'static str {
    if debug {
        "uniemoji=debug"
    } else {
        "uniemoji=info"
    }
}

/// Install the JSON trace subscriber. `debug` comes from the `debug`
/// setting; `RUST_LOG` overrides it.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path, debug: bool) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "uniemoji-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard); // engine lives as long as the host process

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter(debug))),
            )
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path, _debug: bool) {}
