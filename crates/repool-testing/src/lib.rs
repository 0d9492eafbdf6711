//! Testing utilities and harness for repool.

pub mod pool_rule;

pub use pool_rule::*;
