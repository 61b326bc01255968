//! Decimal conversions for JSON bodies.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde_json::Number;

/// Prices are exposed as plain JSON numbers.
///
/// Whole amounts render as integers (`1000`), anything else as the closest float (`19.99`).
pub(crate) trait DecimalExt {
    fn to_json_number(self) -> Number;
}

impl DecimalExt for Decimal {
    fn to_json_number(self) -> Number {
        let normalized = self.normalize();

        if normalized.scale() == 0
            && let Some(whole) = normalized.to_i64()
        {
            return Number::from(whole);
        }

        normalized
            .to_f64()
            .and_then(Number::from_f64)
            .unwrap_or_else(|| Number::from(0))
    }
}
