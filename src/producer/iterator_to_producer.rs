use core::convert::Infallible;
use core::fmt::Debug;
use core::iter::Fuse;

use either::Either::{self, Left, Right};

use crate::producer::Invariant;
use crate::{Exhausted, Producer};

/// A producer created from a finite [`Iterator`].
///
/// See [`iterator_to_producer`].
pub struct IteratorToProducer<I>(Invariant<FuseProducer<I>>);

/// Creates a producer that produces the items of an iterator.
///
/// The iterator is fused, so the producer keeps reporting [`Exhausted`] after the iterator first returned `None`, even if the iterator itself would not.
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::iterator_to_producer;
///
/// let mut p = iterator_to_producer(vec![1, 2, 4]);
/// assert_eq!(p.produce(), Ok(Left(1)));
/// assert_eq!(p.produce(), Ok(Left(2)));
/// assert_eq!(p.produce(), Ok(Left(4)));
/// assert_eq!(p.produce(), Ok(Right(Exhausted)));
/// ```
pub fn iterator_to_producer<I: IntoIterator>(iter: I) -> IteratorToProducer<I::IntoIter> {
    IteratorToProducer(Invariant::new(FuseProducer(iter.into_iter().fuse())))
}

impl<I> IteratorToProducer<I> {
    /// Retrieves the wrapped iterator.
    pub fn into_inner(self) -> Fuse<I> {
        self.0.into_inner().0
    }
}

invarianted_impl_debug!(IteratorToProducer<I: Debug>);
invarianted_impl_producer!(IteratorToProducer<I: Iterator>; Item I::Item; Error Infallible);

#[derive(Debug, Clone)]
struct FuseProducer<I>(Fuse<I>);

impl<I: Iterator> Producer for FuseProducer<I> {
    type Item = I::Item;
    type Error = Infallible;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        match self.0.next() {
            Some(it) => Ok(Left(it)),
            None => Ok(Right(Exhausted)),
        }
    }
}
