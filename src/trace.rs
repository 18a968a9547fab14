// Buffer lifecycle records, emitted through `log` when the feature is enabled.
// Without it the arguments are still type checked but nothing is recorded.
macro_rules! trace_buffer {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::trace!(target: "kvec::storage", $($arg)+);
        #[cfg(not(feature = "log"))]
        let _ = format_args!($($arg)+);
    }};
}
