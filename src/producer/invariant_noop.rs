use either::Either;
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
        Invariant { inner }
    }

    /// Consumes `self` and returns the wrapped producer.
    pub fn into_inner(self) -> P {
        self.inner
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
        self.inner.produce()
    }
}
