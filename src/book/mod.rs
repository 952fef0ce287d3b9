//! Order book domain types
//!
//! Immutable order records and the source seam they are fetched through.

mod order;
mod sample;

pub use order::{Order, Side};
pub use sample::{sample_orders, OrderSource, SampleSource};
