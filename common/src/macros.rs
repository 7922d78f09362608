//! Log macros used across the workspace.
//!
//! They forward to `tracing`; the CLI formatter picks the status glyph from the
//! level and the target.

/// Target used for positive outcomes, rendered with a `[+]` glyph.
pub const SUCCESS_TARGET: &str = "fabmap::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::macros::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}
