//! Process-global request tracing settings.

use std::{sync::OnceLock, time::Duration};

const DEFAULT_SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(1);

static SLOW_REQUEST_THRESHOLD: OnceLock<Duration> = OnceLock::new();

/// First call wins; later calls are ignored.
pub(super) fn set_slow_request_threshold(threshold: Duration) {
    _ = SLOW_REQUEST_THRESHOLD.set(threshold);
}

pub(super) fn slow_request_threshold() -> Duration {
    SLOW_REQUEST_THRESHOLD
        .get()
        .copied()
        .unwrap_or(DEFAULT_SLOW_REQUEST_THRESHOLD)
}
