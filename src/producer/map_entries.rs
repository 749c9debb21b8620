//! Producers over associative containers.
//!
//! The constructors accept anything that iterates over key-value pairs: a `&HashMap<K, V>` or `&BTreeMap<K, V>` yields references, an owned map yields owned keys and values. Items are produced in the container's own iteration order, which is unspecified for hash maps; no sorting is introduced.
//!
//! Borrowing the container for the lifetime of the producer means it cannot be mutated while it is being enumerated.

use core::convert::Infallible;
use core::fmt::Debug;

use either::Either;

use crate::producer::{iterator_to_producer, IteratorToProducer};
use crate::{Exhausted, Producer};

/// Produces the keys of an associative container. See [`keys_of`].
pub struct KeysOf<I>(IteratorToProducer<I>);

/// Produces the values of an associative container. See [`values_of`].
pub struct ValuesOf<I>(IteratorToProducer<I>);

/// Produces the key-value pairs of an associative container. See [`entries_of`].
pub struct EntriesOf<I>(IteratorToProducer<I>);

/// Creates a producer of the keys of `map`, in the map's iteration order.
///
/// ```
/// use std::collections::BTreeMap;
/// use iterate::prelude::*;
/// use iterate::producer::keys_of;
///
/// let map: BTreeMap<_, _> = [(1, 'a'), (2, 'b')].into_iter().collect();
/// let mut p = keys_of(&map);
///
/// assert_eq!(p.produce(), Ok(Left(&1)));
/// assert_eq!(p.produce(), Ok(Left(&2)));
/// assert_eq!(p.produce(), Ok(Right(Exhausted)));
/// ```
pub fn keys_of<M, K, V>(map: M) -> KeysOf<M::IntoIter>
where
    M: IntoIterator<Item = (K, V)>,
{
    KeysOf(iterator_to_producer(map))
}

/// Creates a producer of the values of `map`, in the map's iteration order.
pub fn values_of<M, K, V>(map: M) -> ValuesOf<M::IntoIter>
where
    M: IntoIterator<Item = (K, V)>,
{
    ValuesOf(iterator_to_producer(map))
}

/// Creates a producer of the key-value pairs of `map`, in the map's iteration order.
pub fn entries_of<M, K, V>(map: M) -> EntriesOf<M::IntoIter>
where
    M: IntoIterator<Item = (K, V)>,
{
    EntriesOf(iterator_to_producer(map))
}

impl<I, K, V> Producer for KeysOf<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = K;
    type Error = Infallible;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        Ok(self.0.produce()?.map_left(|(k, _)| k))
    }
}

impl<I, K, V> Producer for ValuesOf<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = V;
    type Error = Infallible;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        Ok(self.0.produce()?.map_left(|(_, v)| v))
    }
}

impl<I, K, V> Producer for EntriesOf<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = (K, V);
    type Error = Infallible;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        self.0.produce()
    }
}

invarianted_impl_debug!(KeysOf<I: Debug>);
invarianted_impl_debug!(ValuesOf<I: Debug>);
invarianted_impl_debug!(EntriesOf<I: Debug>);
