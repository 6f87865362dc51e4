//! Internal logging macros.
//!
//! With the `tracing` feature enabled these forward to `tracing::trace!`; without it
//! they expand to nothing and the arguments are never evaluated.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

pub(crate) use trace_event;
