//! Tracing/logging setup shared by binaries and tests.

/// Initialize process-wide tracing using `RUST_LOG` (default `info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize tracing with an explicit filter directive, ignoring `RUST_LOG`.
pub fn init_with_filter(directive: &str) {
    tracing::init_with_filter(directive);
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;
