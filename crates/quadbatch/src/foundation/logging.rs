//! Logging utilities and structured logging support

use std::sync::Once;

pub use log::{debug, error, info, trace, warn};

static INIT: Once = Once::new();

/// Initialize the logging system from `RUST_LOG`.
///
/// Subsequent calls are ignored, so hosts and tests may both call it.
pub fn init() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_default_env().try_init();
    });
}

/// Initialize the logging system with an explicit filter (e.g. `"quadbatch=trace"`).
///
/// Falls back to `RUST_LOG` semantics when `filter` is empty. Only the first
/// initialization takes effect: if [`init`] or this function already ran, the
/// filter is ignored, a warning is logged and `false` is returned.
pub fn init_with_filter(filter: &str) -> bool {
    let mut applied = false;
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_default_env();
        if !filter.is_empty() {
            builder.parse_filters(filter);
        }
        let _ = builder.try_init();
        applied = true;
        log::debug!("logging initialized with filter {:?}", filter);
    });

    if !applied {
        log::warn!("Logging already initialized, ignoring filter {:?}", filter);
    }
    applied
}
