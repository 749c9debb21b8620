use either::Either::{self, Left, Right};
use wrapper::Wrapper;

use crate::{Exhausted, Producer};

/// A `Producer` wrapper that panics when a producer or its caller violates the API contract.
///
/// This wrapper only performs the checks while testing (more specifically,
/// when `#[cfg(test)]` applies). In production builds, the wrapper does
/// nothing at all and compiles away without any overhead.
///
/// All producers implemented in this crate use this wrapper internally already.
/// We recommend to use this type for all custom producers as well.
///
/// #### Invariants
///
/// The wrapper enforces the following invariants:
///
/// - Once the wrapped producer reported [`Exhausted`], it must keep reporting [`Exhausted`] on every further call.
/// - Must not call [`produce`](Producer::produce) after it has returned an error.
#[derive(Copy, Clone, Hash, Ord, Eq, PartialEq, PartialOrd)]
pub struct Invariant<P> {
    inner: P,
    /// Set once the inner producer reported `Exhausted`.
    exhausted: bool,
    /// Set once the inner producer returned an error.
    failed: bool,
}

impl<P: core::fmt::Debug> core::fmt::Debug for Invariant<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.inner.fmt(f)
    }
}

impl<P> Invariant<P> {
    /// Returns a producer that behaves exactly like the wrapped producer
    /// `inner`, except that - when running tests - it performs runtime
    /// validation of API invariants and panics if they are violated.
    pub fn new(inner: P) -> Self {
        Invariant {
            inner,
            exhausted: false,
            failed: false,
        }
    }

    /// Consumes `self` and returns the wrapped producer.
    pub fn into_inner(self) -> P {
        self.inner
    }

    fn check_failed(&self) {
        if self.failed {
            panic!("may not call `Producer` methods after the producer emitted an error");
        }
    }
}

impl<P> AsRef<P> for Invariant<P> {
    fn as_ref(&self) -> &P {
        &self.inner
    }
}

impl<P> AsMut<P> for Invariant<P> {
    fn as_mut(&mut self) -> &mut P {
        &mut self.inner
    }
}

impl<P> Wrapper<P> for Invariant<P> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Producer> Producer for Invariant<P> {
    type Item = P::Item;
    type Error = P::Error;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        self.check_failed();

        let was_exhausted = self.exhausted;
        let result = self.inner.produce();

        match &result {
            Ok(Left(_)) if was_exhausted => {
                panic!("producer emitted an item after it was exhausted")
            }
            Err(_) if was_exhausted => {
                panic!("producer emitted an error after it was exhausted")
            }
            Ok(Left(_)) => {}
            Ok(Right(Exhausted)) => self.exhausted = true,
            Err(_) => self.failed = true,
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::producer::{from_slice, TestProducerBuilder};

    /// Emits `Exhausted` once, then items again.
    struct Resurrecting(usize);

    impl Producer for Resurrecting {
        type Item = usize;
        type Error = ();

        fn produce(&mut self) -> Result<Either<usize, Exhausted>, ()> {
            self.0 += 1;
            if self.0 == 2 {
                Ok(Right(Exhausted))
            } else {
                Ok(Left(self.0))
            }
        }
    }

    #[test]
    fn accepts_repeated_exhaustion() {
        let mut p = from_slice(b"ufo");
        for _ in 0..3 {
            assert!(matches!(p.produce(), Ok(Left(_))));
        }
        for _ in 0..5 {
            assert_eq!(p.produce(), Ok(Right(Exhausted)));
        }
    }

    #[test]
    #[should_panic(expected = "producer emitted an item after it was exhausted")]
    fn panics_on_item_after_exhaustion() {
        let mut p = Invariant::new(Resurrecting(0));
        assert_eq!(p.produce(), Ok(Left(1)));
        assert_eq!(p.produce(), Ok(Right(Exhausted)));
        let _ = p.produce();
    }

    #[test]
    #[should_panic(expected = "may not call `Producer` methods after the producer emitted an error")]
    fn panics_on_produce_after_error() {
        let mut p = TestProducerBuilder::new(vec![1u8], Err(-1i8)).build();
        assert_eq!(p.produce(), Ok(Left(1)));
        assert_eq!(p.produce(), Err(-1));
        let _ = p.produce();
    }
}
