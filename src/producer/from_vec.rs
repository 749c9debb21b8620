use core::convert::Infallible;
use core::fmt::Debug;

use either::Either::{self, Left, Right};

use crate::producer::Invariant;
use crate::{Exhausted, Producer};

/// Produces the items of an owned vector, in index order, by moving them out.
///
/// See [`from_vec`].
pub struct FromVec<T>(Invariant<MoveFromVec<T>>);

/// Creates a producer that moves the items out of the given vector one at a time.
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::from_vec;
///
/// let mut p = from_vec(vec![String::from("u"), String::from("fo")]);
///
/// assert_eq!(p.produce(), Ok(Left(String::from("u"))));
/// assert_eq!(p.remaining(), &[String::from("fo")]);
/// assert_eq!(p.produce(), Ok(Left(String::from("fo"))));
/// assert_eq!(p.produce(), Ok(Right(Exhausted)));
/// ```
pub fn from_vec<T>(v: Vec<T>) -> FromVec<T> {
    FromVec(Invariant::new(MoveFromVec(v.into_iter())))
}

impl<T> FromVec<T> {
    /// Returns the items that have not been produced yet.
    pub fn remaining(&self) -> &[T] {
        self.0.as_ref().0.as_slice()
    }
}

invarianted_impl_debug!(FromVec<T: Debug>);
invarianted_impl_wrapper!(FromVec<T>; Vec<T>);
invarianted_impl_producer!(FromVec<T>; Item T; Error Infallible);

#[derive(Debug, Clone)]
struct MoveFromVec<T>(std::vec::IntoIter<T>);

impl<T> MoveFromVec<T> {
    /// Returns the items that have not been produced yet.
    fn into_inner(self) -> Vec<T> {
        self.0.collect()
    }
}

impl<T> Producer for MoveFromVec<T> {
    type Item = T;
    type Error = Infallible;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        match self.0.next() {
            Some(item) => Ok(Left(item)),
            None => Ok(Right(Exhausted)),
        }
    }
}
