//! # Companion Module
//!
//! Free functions and extension traits that build options.
//!
//! | entry point          | result                                                |
//! |----------------------|-------------------------------------------------------|
//! | [`apply`]            | `Some` if the nullable input has a value, else `None` |
//! | [`safe_apply`]       | `Some` unless the supplier fails or comes back empty  |
//! | [`safe_apply_value`] | `Some` unless the plain-value supplier panics         |
//! | [`some`]             | shorthand for `apply(Some(value))`                    |
//! | [`none`]             | the untyped [`Empty`] token                           |
//! | [`OptExt`]           | postfix `opt`, `to_some`, `to_none` on any value      |
//! | [`NullableExt`]      | postfix `into_opt` on a standard library option       |
//! | [`flatten`]          | held values of a sequence of options                  |
//! | [`first_option`]     | first element of a sequence, if any                   |

use crate::attempt::{guard, Attempt};
use crate::empty::Empty;
use crate::iter::{Flatten, SequenceExt};
use crate::option::Option;

type StdOption<T> = std::option::Option<T>;

/// Builds an option from a nullable value.
///
/// This is the canonical constructor: an absent input always yields an
/// empty option, never a present one wrapping the absence.
///
/// ```rust
/// use optio::apply;
///
/// assert!(apply(Some(3)).has_value());
/// assert!(apply(None::<i32>).is_empty());
/// ```
pub fn apply<T>(value: StdOption<T>) -> Option<T> {
    match value {
        Some(value) => Option::Some(value),
        None => Option::None,
    }
}

/// Builds an option from a supplier that may fail.
///
/// The result is empty if the supplier panics, returns an `Err`, or returns
/// an absent value. A caught panic still goes through the panic hook, which
/// by default prints the message to stderr.
pub fn safe_apply<A, F>(supplier: F) -> Option<A::Output>
where
    A: Attempt,
    F: FnOnce() -> A,
{
    apply(guard(supplier))
}

/// Builds an option from a supplier of a plain value.
///
/// Only a panic counts as failure; any returned value, including an empty
/// [`Option`], is wrapped as is. The panic hook still reports the caught
/// panic on stderr.
///
/// ```rust
/// use optio::safe_apply_value;
///
/// let items = vec![1, 2, 3];
/// assert!(safe_apply_value(|| items[1]).has_value());
/// assert!(safe_apply_value(|| items[3]).is_empty());
/// ```
pub fn safe_apply_value<T, F>(supplier: F) -> Option<T>
where
    F: FnOnce() -> T,
{
    apply(guard(move || Some(supplier())))
}

/// Builds a present option.
pub fn some<T>(value: T) -> Option<T> {
    apply(Some(value))
}

/// The untyped empty option; converts into `Option<T>` for any `T`.
pub fn none() -> Empty {
    Empty
}

/// Returns the option unchanged; pairs with [`unapply_none`] for pattern
/// style checks.
pub fn unapply_some<T>(option: Option<T>) -> Option<T> {
    option
}

/// Returns `true` if `option` is empty.
pub fn unapply_none<T>(option: &Option<T>) -> bool {
    !option.has_value()
}

/// Lazily yields the held values of `options`, skipping empties and keeping
/// the input order.
pub fn flatten<I, T>(options: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator<Item = Option<T>>,
{
    options.flatten_options()
}

/// The first element of `items`, or an empty option for an empty sequence.
pub fn first_option<I>(items: I) -> Option<I::Item>
where
    I: IntoIterator,
{
    items.first_option()
}

/// Postfix constructors available on every value.
///
/// ```rust
/// use optio::{Option, OptExt};
///
/// assert_eq!(5i32.opt(), Option::Some(5));
/// assert_eq!("five".to_none(), Option::None);
/// ```
pub trait OptExt: Sized {
    /// Postfix form of [`apply`]. A Rust value is never null, so the result
    /// always holds `self`.
    fn opt(self) -> Option<Self> {
        apply(Some(self))
    }

    /// Wraps `self` without going through [`apply`].
    fn to_some(self) -> Option<Self> {
        Option::Some(self)
    }

    /// Discards `self` and returns an empty option of its type.
    fn to_none(self) -> Option<Self> {
        Option::None
    }
}

impl<T> OptExt for T {}

/// Conversion for values that carry their own has-value flag.
pub trait NullableExt {
    /// The type of the value when present.
    type Value;

    /// Converts using the has-value flag.
    fn into_opt(self) -> Option<Self::Value>;
}

impl<T> NullableExt for StdOption<T> {
    type Value = T;

    fn into_opt(self) -> Option<T> {
        apply(self)
    }
}
