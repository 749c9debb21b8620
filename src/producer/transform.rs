use either::Either::{self, Left, Right};

use crate::producer::Invariant;
use crate::{Exhausted, Producer};

/// A `Producer` adaptor that converts every item of an inner producer with a fallible function.
///
/// See [`transform`].
pub struct Transform<P, F> {
    inner: Invariant<P>,
    fun: F,
}

/// Returns a producer that pulls one item from `inner` per call and converts it with `fun`.
///
/// [`Exhausted`] and errors of `inner` pass through unchanged, and `fun` is not called for them. An error returned by `fun` becomes the error of the transformed producer. Nothing is buffered, so chains of transformations never materialise intermediate collections.
///
/// `fun` must return the error type of `inner`; use [`map_error`](crate::producer::map_error) first if the two differ.
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::{from_slice, transform};
///
/// let mut p = transform(from_slice(&[1, 2, 4]), |x| Ok(x * 10));
///
/// assert_eq!(p.produce(), Ok(Left(10)));
/// assert_eq!(p.produce(), Ok(Left(20)));
/// assert_eq!(p.produce(), Ok(Left(40)));
/// assert_eq!(p.produce(), Ok(Right(Exhausted)));
/// ```
pub fn transform<P, U, F>(inner: P, fun: F) -> Transform<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> Result<U, P::Error>,
{
    Transform {
        inner: Invariant::new(inner),
        fun,
    }
}

impl<P: core::fmt::Debug, F> core::fmt::Debug for Transform<P, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Transform")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<P, F> Transform<P, F> {
    /// Consumes `self` and returns the wrapped producer.
    pub fn into_inner(self) -> P {
        self.inner.into_inner()
    }
}

impl<P, U, F> Producer for Transform<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> Result<U, P::Error>,
{
    type Item = U;
    type Error = P::Error;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        match self.inner.produce()? {
            Left(item) => Ok(Left((self.fun)(item)?)),
            Right(Exhausted) => Ok(Right(Exhausted)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::producer::{from_slice, TestProducerBuilder};

    #[test]
    fn chained_transforms_compose() {
        let p = transform(from_slice(&[1u32, 2, 3]), |x| Ok(x + 1));
        let mut p = transform(p, |x| Ok(format!("#{x}")));

        assert_eq!(p.produce(), Ok(Left(String::from("#2"))));
        assert_eq!(p.produce(), Ok(Left(String::from("#3"))));
        assert_eq!(p.produce(), Ok(Left(String::from("#4"))));
        assert_eq!(p.produce(), Ok(Right(Exhausted)));
    }

    #[test]
    fn source_errors_pass_through_without_calling_the_function() {
        let source = TestProducerBuilder::new(vec![1u8], Err("source")).build();
        let mut calls = 0;
        let mut p = transform(source, |x| {
            calls += 1;
            Ok(x)
        });

        assert_eq!(p.produce(), Ok(Left(1)));
        assert_eq!(p.produce(), Err("source"));
        drop(p);
        assert_eq!(calls, 1);
    }

    #[test]
    fn function_errors_become_the_producer_error() {
        let source = TestProducerBuilder::new(vec![1u8, 2, 3], Ok(())).build();
        let mut p = transform(source, |x| if x == 2 { Err("two") } else { Ok(x) });

        assert_eq!(p.produce(), Ok(Left(1)));
        assert_eq!(p.produce(), Err("two"));
        assert_eq!(p.into_inner().remaining(), &[3]);
    }
}
