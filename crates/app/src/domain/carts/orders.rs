//! Order identifiers.

use std::sync::atomic::{AtomicI64, Ordering};

use jiff::Timestamp;

const ORDER_ID_PREFIX: &str = "ORDER-";

/// Issues `ORDER-<millis>` ids that strictly increase within the process.
#[derive(Debug, Default)]
pub(crate) struct OrderIds {
    last: AtomicI64,
}

impl OrderIds {
    pub(crate) fn next(&self, now: Timestamp) -> String {
        let millis = now.as_millisecond();

        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(millis.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);

        let issued = millis.max(previous.saturating_add(1));

        format!("{ORDER_ID_PREFIX}{issued}")
    }
}
