use either::Either;

use crate::producer::Invariant;
use crate::{Exhausted, Producer};

/// A `Producer` adaptor that maps the error emitted by an inner `Producer` with a function.
///
/// See [`map_error`].
#[derive(Copy, Clone, Hash, Ord, Eq, PartialEq, PartialOrd)]
pub struct MapError<P, F> {
    inner: Invariant<P>,
    fun: F,
}

/// Returns a producer that behaves like `inner` except it passes its error (if any) through `fun`.
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::{map_error, TestProducerBuilder};
///
/// let inner = TestProducerBuilder::new(vec![1], Err(404)).build();
/// let mut p = map_error(inner, |code: i32| format!("status {code}"));
///
/// assert_eq!(p.produce(), Ok(Left(1)));
/// assert_eq!(p.produce(), Err(String::from("status 404")));
/// ```
pub fn map_error<P, E, F>(inner: P, fun: F) -> MapError<P, F>
where
    P: Producer,
    F: FnMut(P::Error) -> E,
{
    MapError {
        inner: Invariant::new(inner),
        fun,
    }
}

impl<P: core::fmt::Debug, F> core::fmt::Debug for MapError<P, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MapError")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<P, F> MapError<P, F> {
    /// Consumes `self` and returns the wrapped producer.
    pub fn into_inner(self) -> P {
        self.inner.into_inner()
    }
}

impl<P, E, F> Producer for MapError<P, F>
where
    P: Producer,
    F: FnMut(P::Error) -> E,
{
    type Item = P::Item;
    type Error = E;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        self.inner.produce().map_err(&mut self.fun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::convert::Infallible;

    use either::Either::{Left, Right};

    use crate::producer::from_slice;

    /// Fails on every call, without any checks of its own.
    struct AlwaysFails;

    impl Producer for AlwaysFails {
        type Item = ();
        type Error = u8;

        fn produce(&mut self) -> Result<Either<(), Exhausted>, u8> {
            Err(1)
        }
    }

    #[test]
    fn exhaustion_passes_through_without_calling_the_function() {
        let mut calls = 0;
        let mut p = map_error(from_slice(&[1u8]), |never: Infallible| -> u8 {
            calls += 1;
            match never {}
        });

        assert_eq!(p.produce(), Ok(Left(1)));
        assert_eq!(p.produce(), Ok(Right(Exhausted)));
        assert_eq!(p.produce(), Ok(Right(Exhausted)));
        drop(p);
        assert_eq!(calls, 0);
    }

    #[test]
    #[should_panic(expected = "may not call `Producer` methods after the producer emitted an error")]
    fn panics_on_produce_after_mapped_error() {
        let mut p = map_error(AlwaysFails, u16::from);

        assert_eq!(p.produce(), Err(1u16));
        let _ = p.produce();
    }
}
