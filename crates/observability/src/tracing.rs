//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Initialize JSON logging filtered by `RUST_LOG`, falling back to `info`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

/// Initialize JSON logging with a fixed directive (e.g. `gildedrose_inventory=trace`).
///
/// An unparsable directive falls back to `info`.
pub fn init_with_filter(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        init_with_filter("not a [valid directive");
    }
}
