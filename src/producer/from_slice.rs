use core::convert::Infallible;
use core::fmt::Debug;

use either::Either::{self, Left, Right};

use crate::producer::Invariant;
use crate::{Exhausted, Producer};

/// Produces clones of the items of a slice, in index order.
///
/// See [`from_slice`].
pub struct FromSlice<'a, T>(Invariant<CloneFromSlice<'a, T>>);

/// Creates a producer that sequentially clones and produces the items of the given slice.
///
/// The slice itself is never copied; each pull clones exactly one item. An empty slice yields [`Exhausted`] right away.
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::from_slice;
///
/// let mut p = from_slice(&[1, 2, 4]);
///
/// assert_eq!(p.produce(), Ok(Left(1)));
/// assert_eq!(p.produce(), Ok(Left(2)));
/// assert_eq!(p.produce(), Ok(Left(4)));
/// assert_eq!(p.produce(), Ok(Right(Exhausted)));
/// assert_eq!(p.produce(), Ok(Right(Exhausted)));
/// ```
pub fn from_slice<T: Clone>(slice: &[T]) -> FromSlice<'_, T> {
    FromSlice(Invariant::new(CloneFromSlice(slice, 0)))
}

impl<'a, T> FromSlice<'a, T> {
    /// Returns the offset into the slice at which the next item will be produced.
    pub fn offset(&self) -> usize {
        self.0.as_ref().1
    }

    /// Returns the subslice of items that have been produced so far.
    ///
    /// ```
    /// use iterate::prelude::*;
    /// use iterate::producer::from_slice;
    ///
    /// let mut p = from_slice(&[1, 2, 4]);
    /// assert!(p.produced().is_empty());
    /// assert_eq!(p.produce(), Ok(Left(1)));
    /// assert_eq!(p.produced(), &[1]);
    /// assert_eq!(p.remaining(), &[2, 4]);
    /// ```
    pub fn produced(&self) -> &'a [T] {
        let inner = self.0.as_ref();
        &inner.0[..inner.1]
    }

    /// Returns the subslice of items that have not been produced yet.
    pub fn remaining(&self) -> &'a [T] {
        let inner = self.0.as_ref();
        &inner.0[inner.1..]
    }
}

invarianted_impl_debug!(FromSlice<'a, T: Debug>);
invarianted_impl_wrapper!(FromSlice<'a, T>; &'a [T]);
invarianted_impl_producer!(FromSlice<'a, T: Clone>; Item T; Error Infallible);

#[derive(Debug, Clone)]
struct CloneFromSlice<'a, T>(&'a [T], usize);

impl<'a, T> CloneFromSlice<'a, T> {
    fn into_inner(self) -> &'a [T] {
        self.0
    }
}

impl<'a, T: Clone> Producer for CloneFromSlice<'a, T> {
    type Item = T;
    type Error = Infallible;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        match self.0.get(self.1) {
            Some(item) => {
                self.1 += 1;
                Ok(Left(item.clone()))
            }
            None => Ok(Right(Exhausted)),
        }
    }
}
