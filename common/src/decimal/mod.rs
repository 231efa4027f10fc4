//! Decimal type utilities for precise monetary calculations

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Monetary amount with high precision
pub type Amount = Decimal;

/// Serde adapter writing amounts as JSON numbers without going through f64.
/// Reading accepts numbers and numeric strings.
pub use rust_decimal::serde::arbitrary_precision as json_number;
