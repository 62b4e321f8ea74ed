// Feature-gated diagnostics. With `feature = "tracing"` each macro
// forwards to the corresponding `tracing` macro under the "selector"
// target; without it the call compiles away and the arguments are never
// evaluated.

macro_rules! strace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "selector", $($arg)*);
    }};
}

macro_rules! sdebug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "selector", $($arg)*);
    }};
}

macro_rules! swarn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::warn!(target: "selector", $($arg)*);
    }};
}
