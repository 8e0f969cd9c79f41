//! Internal event macro.
//!
//! Forwards to `tracing::debug!` when the `tracing` feature is on and
//! expands to nothing otherwise, so call sites never carry `cfg` noise.

#[cfg(feature = "tracing")]
macro_rules! discard_event {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "optio", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! discard_event {
    ($($arg:tt)*) => {};
}

pub(crate) use discard_event;
