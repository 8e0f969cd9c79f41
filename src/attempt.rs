//! # Attempt Module
//!
//! Results of caller-supplied functions that may fail or come back empty.
//!
//! The safe combinators ([`Option::safe_map`](crate::Option::safe_map) and
//! [`safe_apply`](crate::safe_apply)) accept any [`Attempt`] and fold every
//! kind of failure into an empty option:
//!
//! - an absent result (`None` of the standard library option)
//! - an `Err` result
//! - a panic raised while computing the result
//!
//! This crate's own [`Option`](crate::Option) is deliberately *not* an
//! [`Attempt`]: an empty `Option` returned by a successful function is a
//! value like any other and stays wrapped. Plain values go through
//! [`Option::safe_map_value`](crate::Option::safe_map_value) and
//! [`safe_apply_value`](crate::safe_apply_value), where only a panic counts
//! as failure.
//!
//! ```rust
//! use optio::safe_apply;
//!
//! assert!(safe_apply(|| "42".parse::<i32>()).has_value());
//! assert!(safe_apply(|| "forty-two".parse::<i32>()).is_empty());
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::trace::discard_event;

type StdOption<T> = std::option::Option<T>;

/// A value that either carries a usable output or signals failure/absence.
pub trait Attempt {
    /// The value carried on success.
    type Output;

    /// Converts into the carried value, or `None` for any failure.
    fn into_outcome(self) -> StdOption<Self::Output>;
}

impl<U> Attempt for StdOption<U> {
    type Output = U;

    fn into_outcome(self) -> StdOption<U> {
        self
    }
}

impl<U, E> Attempt for Result<U, E> {
    type Output = U;

    fn into_outcome(self) -> StdOption<U> {
        match self {
            Ok(value) => Some(value),
            Err(_) => {
                discard_event!(error = std::any::type_name::<E>(), "discarding failed result");
                None
            }
        }
    }
}

/// Runs `f`, turning a panic or a failed [`Attempt`] into `None`.
///
/// The panic hook is left alone, so a caught panic still prints its usual
/// message to stderr.
pub(crate) fn guard<A, F>(f: F) -> StdOption<A::Output>
where
    A: Attempt,
    F: FnOnce() -> A,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(attempt) => attempt.into_outcome(),
        Err(_payload) => {
            discard_event!(panic = panic_message(_payload.as_ref()), "discarding panic");
            None
        }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string panic payload>"
    }
}
