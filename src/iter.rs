//! Sequence views over options.

use std::iter::FusedIterator;

use crate::companion::safe_apply;
use crate::option::Option;

type StdOption<T> = std::option::Option<T>;

/// Borrowing iterator over the value of an [`Option`], created by
/// [`Option::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: StdOption<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: StdOption<&'a T>) -> Self {
        Self { inner }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> StdOption<&'a T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, StdOption<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> StdOption<&'a T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the value of an [`Option`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: StdOption<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: StdOption<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> StdOption<T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, StdOption<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> StdOption<T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Lazy iterator over the held values of a sequence of options.
///
/// Created by [`flatten`](crate::flatten) and
/// [`SequenceExt::flatten_options`]. Empty options are skipped and the order
/// of the input is kept.
#[derive(Debug, Clone)]
pub struct Flatten<I> {
    inner: I,
}

impl<I> Flatten<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I, T> Iterator for Flatten<I>
where
    I: Iterator<Item = Option<T>>,
{
    type Item = T;

    fn next(&mut self) -> StdOption<T> {
        for option in &mut self.inner {
            if let Option::Some(value) = option {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, StdOption<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<I, T> FusedIterator for Flatten<I> where I: FusedIterator<Item = Option<T>> {}

/// Option-producing adapters for any sequence.
///
/// ```rust
/// use optio::{Option, SequenceExt};
///
/// let readings = vec![Option::Some(1), Option::None, Option::Some(3)];
/// let present: Vec<i32> = readings.flatten_options().collect();
/// assert_eq!(present, vec![1, 3]);
///
/// assert_eq!(Vec::<i32>::new().first_option(), Option::None);
/// assert_eq!(vec![7, 8].first_option(), Option::Some(7));
/// ```
pub trait SequenceExt: IntoIterator + Sized {
    /// Lazily yields the held values of a sequence of options, in order.
    fn flatten_options<T>(self) -> Flatten<Self::IntoIter>
    where
        Self: IntoIterator<Item = Option<T>>,
    {
        Flatten::new(self.into_iter())
    }

    /// The first element of the sequence, or an empty option.
    ///
    /// Only the first element is pulled. A sequence that panics while
    /// producing it also yields an empty option.
    fn first_option(self) -> Option<Self::Item> {
        let mut iter = self.into_iter();
        safe_apply(move || iter.next())
    }
}

impl<I: IntoIterator> SequenceExt for I {}
