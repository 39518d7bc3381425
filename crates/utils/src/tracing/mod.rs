use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Boxed error returned by subscriber initialisation
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Default filter directive when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the tracing system
///
/// Reads the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<(), InitError> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;
    install(filter)
}

/// Initialize the tracing system with an explicit filter directive such as
/// `"evtree_core=trace"`
pub fn init_with_filter(directive: &str) -> Result<(), InitError> {
    let filter = EnvFilter::try_new(directive)?;
    install(filter)
}

fn install(filter: EnvFilter) -> Result<(), InitError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create a span grouping work done on behalf of one event name
pub fn event_span(event: &str) -> Span {
    span!(Level::INFO, "event", event = %event)
}
