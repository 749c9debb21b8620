//! The [`Producer`] trait, the producers that adapt existing data into producers, and the lazy producer adaptors.
//!
//! ## Sources
//!
//! - [`from_slice`] and [`from_vec`] produce the items of a sequence in index order.
//! - [`keys_of`], [`values_of`], and [`entries_of`] enumerate associative containers in their own iteration order.
//! - [`from_channel`] receives from a channel; [`from_channel_ctx`] does the same but gives up once a [`Context`](crate::Context) fires.
//! - [`iterator_to_producer`] adapts any finite iterator.
//!
//! ## Adaptors
//!
//! [`transform`] converts items, [`map_error`] converts errors. Both pull exactly one item from their inner producer per call, and neither buffers anything.
//!
//! ## Development Helpers
//!
//! The [Invariant] adaptor wraps any producer and makes it panic during tests when the producer keeps emitting after it was exhausted, or when client code keeps pulling after an error. In production builds, the wrapper does nothing and compiles away without any overhead. We recommend using this wrapper as an implementation detail of all custom producers; all producers in this crate use this wrapper internally.
//!
//! The [TestProducer] exists for testing code that interacts with arbitrary producers; it emits a scripted sequence of items, followed by [`Exhausted`] or an error, and counts how often it was pulled. With the `dev` feature, it implements `arbitrary::Arbitrary` for fuzzing.

use either::Either;

#[macro_use]
mod macros;

#[cfg(test)]
mod invariant;
#[cfg(not(test))]
mod invariant_noop;
#[cfg(test)]
pub use invariant::Invariant;
#[cfg(not(test))]
pub use invariant_noop::Invariant;

mod from_channel;
pub use from_channel::{from_channel, FromChannel};

mod from_channel_ctx;
pub use from_channel_ctx::{from_channel_ctx, FromChannelCtx};

mod from_slice;
pub use from_slice::{from_slice, FromSlice};

mod from_vec;
pub use from_vec::{from_vec, FromVec};

mod iterator_to_producer;
pub use iterator_to_producer::{iterator_to_producer, IteratorToProducer};

mod map_entries;
pub use map_entries::{entries_of, keys_of, values_of, EntriesOf, KeysOf, ValuesOf};

mod map_error;
pub use map_error::{map_error, MapError};

mod producer_ext;
pub use producer_ext::ProducerExt;

mod test_producer;
pub use test_producer::{TestProducer, TestProducerBuilder};

mod transform;
pub use transform::{transform, Transform};

/// The marker a [`Producer`] emits instead of an item once it has no more items.
///
/// Being exhausted is not a failure: every driver of this crate treats it as successful termination.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Exhausted;

/// A `Producer` produces a sequence of items, one item per call, on demand.
///
/// Each call to [`produce`](Producer::produce) has exactly one of three outcomes:
///
/// - `Ok(Left(item))`: the next item.
/// - `Ok(Right(Exhausted))`: there are no more items. This is *not* an error.
/// - `Err(err)`: producing failed. Drivers abort and hand the error to their caller unchanged.
///
/// Producers are stateful: every call advances an internal cursor, which is why [`produce`](Producer::produce) takes `&mut self`. Driving the same producer from several threads at once requires external synchronisation.
pub trait Producer {
    /// The type of the items to be produced.
    type Item;
    /// The type of errors the producer can emit instead of doing its job.
    type Error;

    /// Attempts to produce the next item. If no item is available yet, blocks the calling thread until one becomes available, or until it becomes clear that the producer is exhausted or has failed.
    ///
    /// #### Invariants
    ///
    /// Once this returned [`Exhausted`], it must return [`Exhausted`] on every further call.
    ///
    /// Must not be called after it returned an error.
    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error>;
}

impl<P: Producer + ?Sized> Producer for &mut P {
    type Item = P::Item;
    type Error = P::Error;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        (**self).produce()
    }
}

impl<P: Producer + ?Sized> Producer for Box<P> {
    type Item = P::Item;
    type Error = P::Error;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        (**self).produce()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use either::Either::{Left, Right};

    #[test]
    fn boxed_trait_objects_are_producers() {
        let mut p: Box<dyn Producer<Item = u8, Error = core::convert::Infallible>> =
            Box::new(from_slice(&[9]));

        assert_eq!(p.produce(), Ok(Left(9)));
        assert_eq!(p.produce(), Ok(Right(Exhausted)));
    }
}
