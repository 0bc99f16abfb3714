//! Test harness for the isometric scene pipeline.
//!
//! Provides shared frame and scene builders, a recording [`MockSink`],
//! and rich assertion helpers with diagnostic output for scenario tests.

pub mod assertions;
pub mod helpers;
pub mod sink;

pub use helpers::HarnessError;
pub use sink::{MockSink, SinkEvent};
