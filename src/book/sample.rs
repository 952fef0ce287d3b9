//! Fixed sample dataset
//!
//! Placeholder for a future real data source. Only the `Order` fields are
//! assumed about that source's shape.

use super::{Order, Side};
use rust_decimal_macros::dec;

/// Source of order records for the view
///
/// The reducer treats any error from a source as a data preparation failure;
/// nothing structured leaks past the view boundary.
pub trait OrderSource {
    /// Fetch the current set of orders
    fn fetch(&self) -> anyhow::Result<Vec<Order>>;
}

/// The built-in sample source
///
/// Returns the same six orders on every fetch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl OrderSource for SampleSource {
    fn fetch(&self) -> anyhow::Result<Vec<Order>> {
        Ok(sample_orders())
    }
}

/// The fixed six-order sample set
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            side: Side::Short,
            price: dec!(101.25),
            amount: dec!(0.45),
        },
        Order {
            side: Side::Short,
            price: dec!(102.10),
            amount: dec!(1.2),
        },
        Order {
            side: Side::Short,
            price: dec!(103.50),
            amount: dec!(0.75),
        },
        Order {
            side: Side::Long,
            price: dec!(100.20),
            amount: dec!(0.6),
        },
        Order {
            side: Side::Long,
            price: dec!(99.80),
            amount: dec!(1.5),
        },
        Order {
            side: Side::Long,
            price: dec!(98.30),
            amount: dec!(0.8),
        },
    ]
}
