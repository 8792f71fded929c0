use std::env;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Install the global tracing subscriber once, honoring the `WAVGAP_LOG`
/// filter variable (e.g. `WAVGAP_LOG=wavgap=debug`). A no-op when the
/// variable is unset, so embedding applications keep control of their own
/// logging.
pub fn init_tracing() {
    let Ok(filter) = env::var("WAVGAP_LOG") else {
        return;
    };

    let _ = TRACING_INIT.get_or_init(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
