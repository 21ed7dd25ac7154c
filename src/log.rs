//! Debug instrumentation for scale fitting, grid sizing, and cabinet
//! placement.
//!
//! The renderers are pure functions, so logging is strictly optional: with
//! the `tracing` cargo feature these forward to `tracing`'s macros, and
//! without it they compile to nothing, so plain builds of the CLI carry no
//! logging machinery at all.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
