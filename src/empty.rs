//! The untyped empty token and the emptiness predicate.
//!
//! [`Empty`] stands in for "an empty option of whatever type is needed": it
//! converts into an empty [`Option<T>`] for every `T` and compares equal to
//! all of them. [`is_none`] answers "is this an empty option?" for any value
//! implementing [`Emptiness`], including trait objects, so empties of
//! unrelated element types can be compared without a shared `PartialEq`.

use std::fmt;

use crate::option::Option;

type StdOption<T> = std::option::Option<T>;

/// An empty option with no element type attached.
///
/// ```rust
/// use optio::{none, Option};
///
/// let port: Option<u16> = none().into();
/// assert!(port.is_empty());
/// assert!(port == none());
/// ```
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Empty;

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("None")
    }
}

impl<T> From<Empty> for Option<T> {
    fn from(_: Empty) -> Self {
        Option::None
    }
}

impl<T> PartialEq<Empty> for Option<T> {
    fn eq(&self, _: &Empty) -> bool {
        self.is_empty()
    }
}

impl<T> PartialEq<Option<T>> for Empty {
    fn eq(&self, other: &Option<T>) -> bool {
        other.is_empty()
    }
}

/// Values that may be an empty option.
pub trait Emptiness {
    /// Returns `true` if `self` is an empty option.
    fn is_empty_option(&self) -> bool;
}

impl<T> Emptiness for Option<T> {
    fn is_empty_option(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for Empty {
    fn is_empty_option(&self) -> bool {
        true
    }
}

impl<E: Emptiness + ?Sized> Emptiness for &E {
    fn is_empty_option(&self) -> bool {
        (**self).is_empty_option()
    }
}

/// Checks whether `obj` is an empty option.
///
/// An absent `obj` is *not* empty: "no option given" is different from "an
/// option holding nothing".
///
/// ```rust
/// use optio::{is_none, none, Emptiness, Option};
///
/// let ints: Option<i32> = Option::None;
/// let names: Option<String> = Option::None;
/// assert!(is_none(Some(&ints)) && is_none(Some(&names)));
/// assert!(is_none(Some(&none())));
/// assert!(!is_none::<dyn Emptiness>(None));
/// ```
pub fn is_none<O>(obj: StdOption<&O>) -> bool
where
    O: Emptiness + ?Sized,
{
    match obj {
        Some(obj) => obj.is_empty_option(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_converts_to_any_type() {
        let a: Option<i32> = Empty.into();
        let b: Option<Vec<String>> = Empty.into();
        assert!(a.is_empty());
        assert!(b.is_empty());
    }

    #[test]
    fn test_empty_equality_both_directions() {
        assert!(Option::<i32>::None == Empty);
        assert!(Empty == Option::<i32>::None);
        assert!(Option::Some(1) != Empty);
        assert!(Empty != Option::Some(1));
        assert_eq!(Empty, Empty);
    }

    #[test]
    fn test_is_none_on_trait_objects() {
        let values: Vec<Box<dyn Emptiness>> = vec![
            Box::new(Option::<u8>::None),
            Box::new(Option::Some("x")),
            Box::new(Empty),
        ];
        let flags: Vec<bool> = values.iter().map(|v| is_none(Some(&**v))).collect();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Empty.to_string(), "None");
    }
}
