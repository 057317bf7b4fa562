//! Browser-free chart logic.
//!
//! Everything below `domain` is plain Rust: market data value objects, the
//! viewport state and its update functions, frame geometry, errors and the
//! logging facade. Browser types only appear in `infrastructure`.

pub mod chart;
pub mod errors;
pub mod logging;
pub mod market_data;
