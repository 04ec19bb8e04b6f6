//! Error types for region loading.
//!
//! Errors from the metadata fetch stop at the loader boundary: the loader
//! stores [`LoadError::user_message`] in the selection store and never
//! re-raises. Shell-level failures (terminal setup, binding the mock
//! server) use `color_eyre::Result` in the binary instead.
//!
//! | Variant | Cause |
//! |---------|-------|
//! | Transport | connection, DNS, timeout |
//! | Status | non-2xx response |
//! | MalformedBody | body is not `{"regions": [...]}` |

mod load;

pub use load::{LoadError, LoadResult, FALLBACK_MESSAGE};
