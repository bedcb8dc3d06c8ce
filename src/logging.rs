use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "GLASSBAR_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so stdout stays reserved for the
/// JSON lines the CLI prints. Set `GLASSBAR_LOG` to a file path to enable it.
///
/// Log files get a `{path}.{timestamp}.{pid}` name so concurrent hosts
/// never write into the same file.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    // A host that already installed a subscriber keeps it.
    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: Logging already initialized, {} not used: {}", unique_path, err);
    }
}
