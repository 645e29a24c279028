use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "GAME_BRIDGE_LOG";

/// Installs a file subscriber for the bridge's own events.
///
/// The embedding application owns the console and usually its own
/// subscriber, so this is opt-in: it only runs when `GAME_BRIDGE_LOG` names
/// a file, and it yields to a subscriber that is already installed.
/// Verbosity comes from `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let Some(base) = std::env::var_os(LOG_ENV) else {
        return;
    };

    let path = session_log_path(PathBuf::from(base));
    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("game-bridge: cannot create log file {}: {}", path.display(), err);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

/// One file per page session: `{base}.{unix_secs}.{pid}`.
fn session_log_path(base: PathBuf) -> PathBuf {
    let started = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.into_os_string();
    name.push(format!(".{}.{}", started, std::process::id()));
    PathBuf::from(name)
}
