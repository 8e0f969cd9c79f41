//! # Option Module
//!
//! The [`Option`] type: a value that is either present ([`Option::Some`]) or
//! empty ([`Option::None`]), together with its combinators.
//!
//! ## Combinator Overview
//!
//! - **Transforming**: [`map`](Option::map), [`safe_map`](Option::safe_map),
//!   [`flat_map`](Option::flat_map), [`applicative`](Option::applicative)
//! - **Recovering**: [`or`](Option::or), [`get_or_else`](Option::get_or_else),
//!   [`get_or`](Option::get_or)
//! - **Eliminating**: [`fold`](Option::fold), [`match_on`](Option::match_on),
//!   [`match_with`](Option::match_with), [`for_each`](Option::for_each)
//!
//! The raw value is never handed out directly: every way of reading it goes
//! through one of the combinators above or through the sequence view
//! ([`Option::iter`] and `IntoIterator`).
//!
//! ## Example
//!
//! ```rust
//! use optio::{apply, Option};
//!
//! let port: Option<&str> = apply(Some("8080"));
//! let parsed = port.safe_map(|p| p.parse::<u16>());
//! assert_eq!(parsed.get_or(80), 8080);
//!
//! let missing: Option<&str> = Option::empty();
//! assert_eq!(missing.safe_map(|p| p.parse::<u16>()).get_or(80), 80);
//! ```

use std::fmt;

use crate::attempt::{guard, Attempt};
use crate::error::OptionError;
use crate::iter::{IntoIter, Iter};

type StdOption<T> = std::option::Option<T>;

/// An optional value.
///
/// Exactly one variant holds, and an option never changes variant once it
/// has been built. Empties of different element types are compared through
/// [`Empty`](crate::Empty) and [`is_none`](crate::is_none).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Option<T> {
    /// No value.
    None,
    /// Exactly one value.
    Some(T),
}

impl<T> Option<T> {
    /// Creates an empty option, with `T` inferred from context.
    pub fn empty() -> Self {
        Option::None
    }

    /// Returns `true` if no value is held.
    pub fn is_empty(&self) -> bool {
        matches!(self, Option::None)
    }

    /// Returns `true` if a value is held.
    pub fn has_value(&self) -> bool {
        !self.is_empty()
    }

    /// Takes the held value out, failing on an empty option.
    ///
    /// Internal so that callers go through the combinators instead.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn get(self) -> Result<T, OptionError> {
        match self {
            Option::Some(value) => Ok(value),
            Option::None => Err(OptionError::EmptyAccess),
        }
    }

    /// Maps the held value with `f`.
    ///
    /// `f` is not invoked on an empty option. A panic in `f` propagates to
    /// the caller.
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Option::Some(value) => Option::Some(f(value)),
            Option::None => Option::None,
        }
    }

    /// Maps the held value with a function that may fail.
    ///
    /// Any failure of `f` yields an empty option: a panic, an `Err` result or
    /// an absent (`std::option::Option::None`) result. `f` is not invoked on
    /// an empty option. For a function returning a plain value, use
    /// [`safe_map_value`](Option::safe_map_value).
    ///
    /// A caught panic is not silenced: the installed panic hook still runs
    /// and, by default, prints the panic message to stderr.
    ///
    /// ```rust
    /// use optio::Option;
    ///
    /// let text = Option::Some("12");
    /// assert_eq!(text.safe_map(|t| t.parse::<i32>()), Option::Some(12));
    /// assert!(Option::Some("x").safe_map(|t| t.parse::<i32>()).is_empty());
    /// assert!(Option::Some(0).safe_map(|d| 10i32.checked_div(d)).is_empty());
    /// ```
    pub fn safe_map<A, F>(self, f: F) -> Option<A::Output>
    where
        A: Attempt,
        F: FnOnce(T) -> A,
    {
        match self {
            Option::Some(value) => Option::from(guard(move || f(value))),
            Option::None => Option::None,
        }
    }

    /// Maps the held value with `f`, turning a panic in `f` into an empty
    /// option.
    ///
    /// This is [`map`](Option::map) with failure recovery: whatever `f`
    /// returns is wrapped as is, including an empty option of this crate.
    /// As with [`safe_map`](Option::safe_map), the panic hook still reports
    /// the caught panic on stderr.
    ///
    /// ```rust
    /// use optio::Option;
    ///
    /// assert_eq!(Option::Some(5).safe_map_value(|d| 10 / d), Option::Some(2));
    /// assert!(Option::Some(0).safe_map_value(|d| 10 / d).is_empty());
    /// ```
    pub fn safe_map_value<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Option::Some(value) => Option::from(guard(move || Some(f(value)))),
            Option::None => Option::None,
        }
    }

    /// Returns the held value, or the result of `f` if empty.
    ///
    /// `f` is only evaluated when the option is empty.
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Option::Some(value) => value,
            Option::None => f(),
        }
    }

    /// Returns the held value, or `default` if empty.
    ///
    /// `default` is evaluated by the caller whether it is used or not; use
    /// [`get_or_else`](Option::get_or_else) to defer it.
    pub fn get_or(self, default: T) -> T {
        match self {
            Option::Some(value) => value,
            Option::None => default,
        }
    }

    /// Maps the held value to another option, without re-wrapping.
    pub fn flat_map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Option::Some(value) => f(value),
            Option::None => Option::None,
        }
    }

    /// Keeps `self` if it holds a value, otherwise returns the option
    /// produced by `f`.
    pub fn or<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Option::Some(_) => self,
            Option::None => f(),
        }
    }

    /// Collapses the option into a single result. Exactly one of the two
    /// functions runs.
    pub fn fold<Y, E, F>(self, if_empty: E, f: F) -> Y
    where
        E: FnOnce() -> Y,
        F: FnOnce(T) -> Y,
    {
        match self {
            Option::Some(value) => f(value),
            Option::None => if_empty(),
        }
    }

    /// Dispatches on the variant: `some` receives the held value, `none`
    /// runs when empty.
    ///
    /// ```rust
    /// use optio::Option;
    ///
    /// let greeting = Option::Some("world").match_on(
    ///     |name| format!("hello {name}"),
    ///     || "nobody here".to_string(),
    /// );
    /// assert_eq!(greeting, "hello world");
    /// ```
    pub fn match_on<R, S, N>(self, some: S, none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        self.fold(none, some)
    }

    /// Like [`match_on`](Option::match_on), but the `none` branch may be
    /// left out. An empty option with no `none` branch yields `R::default()`.
    pub fn match_on_opt<R, S, N>(self, some: S, none: StdOption<N>) -> R
    where
        R: Default,
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match (self, none) {
            (Option::Some(value), _) => some(value),
            (Option::None, Some(none)) => none(),
            (Option::None, None) => R::default(),
        }
    }

    /// Side-effecting dispatch; exactly one branch runs.
    pub fn match_with<S, N>(self, some: S, none: N)
    where
        S: FnOnce(T),
        N: FnOnce(),
    {
        self.match_on(some, none)
    }

    /// Runs `if_some` with the held value, does nothing when empty.
    pub fn for_each<F>(self, if_some: F)
    where
        F: FnOnce(T),
    {
        self.match_on(if_some, || ())
    }

    /// Applies a wrapped function to this option.
    ///
    /// The result holds a value only if both `tf` and `self` do.
    ///
    /// ```rust
    /// use optio::Option;
    ///
    /// let double = Option::Some(|x: i32| x * 2);
    /// assert_eq!(Option::Some(21).applicative(double), Option::Some(42));
    /// assert!(Option::<i32>::None.applicative(double).is_empty());
    /// ```
    pub fn applicative<U, F>(self, tf: Option<F>) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        tf.flat_map(|f| self.map(f))
    }

    /// Borrows the held value.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::None => Option::None,
        }
    }

    /// Borrows the held value as a standard library option.
    pub fn as_std_ref(&self) -> StdOption<&T> {
        self.as_ref().into_std()
    }

    /// Converts into a standard library option.
    pub fn into_std(self) -> StdOption<T> {
        match self {
            Option::Some(value) => Some(value),
            Option::None => None,
        }
    }

    /// Iterates over the held value, yielding zero or one item.
    ///
    /// Every call starts a fresh iteration.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_std_ref())
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Option::None
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    fn from(value: StdOption<T>) -> Self {
        match value {
            Some(value) => Option::Some(value),
            None => Option::None,
        }
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    fn from(value: Option<T>) -> Self {
        value.into_std()
    }
}

impl<T: fmt::Debug> fmt::Debug for Option<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Option::Some(value) => f.debug_tuple("Some").field(value).finish(),
            Option::None => f.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Option::Some(value) => write!(f, "Some({})", value),
            Option::None => f.write_str("None"),
        }
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_std())
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
