use core::fmt::Debug;

#[cfg(feature = "dev")]
use arbitrary::{Arbitrary, Unstructured};
use either::Either::{self, Left, Right};

use crate::producer::Invariant;
use crate::{Exhausted, Producer};

/// If you need to test code that works with arbitrary producers, use this one. You can choose which items it emits, and whether it then reports [`Exhausted`] or an error. It counts how often it was pulled, so tests can check that a driver stops pulling when it should.
///
/// Create new [`TestProducer`]s either via a [`TestProducerBuilder`] or via the implementation of `arbitrary::Arbitrary` (feature `dev`).
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::TestProducerBuilder;
///
/// let mut p = TestProducerBuilder::new(vec![1, 2], Err("oh no")).build();
///
/// assert_eq!(p.produce(), Ok(Left(1)));
/// assert_eq!(p.produce(), Ok(Left(2)));
/// assert_eq!(p.produce(), Err("oh no"));
/// assert_eq!(p.pulls(), 3);
/// ```
pub struct TestProducer<Item, Error>(Invariant<Scripted<Item, Error>>);

impl<Item, Error> TestProducer<Item, Error> {
    /// Returns a slice of all items that will be produced in the future.
    pub fn remaining(&self) -> &[Item] {
        self.0.as_ref().remaining()
    }

    /// Returns how often [`produce`](Producer::produce) was called so far.
    pub fn pulls(&self) -> usize {
        self.0.as_ref().pulls
    }

    /// Returns what the producer emits once all items are gone.
    pub fn last(&self) -> &Result<(), Error> {
        &self.0.as_ref().last
    }
}

invarianted_impl_debug!(TestProducer<Item: Debug, Error: Debug>);
invarianted_impl_producer!(TestProducer<Item: Clone, Error: Clone>; Item Item; Error Error);

#[cfg(feature = "dev")]
impl<'a, Item: Arbitrary<'a>, Error: Arbitrary<'a>> Arbitrary<'a> for TestProducer<Item, Error> {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let items = Vec::<Item>::arbitrary(u)?;
        let last = Result::<(), Error>::arbitrary(u)?;

        Ok(TestProducerBuilder::new(items, last).build())
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        arbitrary::size_hint::and(
            Vec::<Item>::size_hint(depth),
            Result::<(), Error>::size_hint(depth),
        )
    }
}

/// Configures a [`TestProducer`].
#[derive(Debug, Clone)]
pub struct TestProducerBuilder<Item, Error> {
    items: Vec<Item>,
    last: Result<(), Error>,
}

impl<Item, Error> TestProducerBuilder<Item, Error> {
    /// Creates a builder for a producer that emits `items`, followed by [`Exhausted`] if `last` is `Ok(())`, or by the error in `last` otherwise.
    pub fn new(items: Vec<Item>, last: Result<(), Error>) -> Self {
        TestProducerBuilder { items, last }
    }

    /// Builds the configured producer.
    pub fn build(self) -> TestProducer<Item, Error> {
        TestProducer(Invariant::new(Scripted {
            items: self.items,
            offset: 0,
            last: self.last,
            pulls: 0,
        }))
    }
}

#[derive(Debug, Clone)]
struct Scripted<Item, Error> {
    items: Vec<Item>,
    offset: usize,
    last: Result<(), Error>,
    pulls: usize,
}

impl<Item, Error> Scripted<Item, Error> {
    fn remaining(&self) -> &[Item] {
        &self.items[self.offset..]
    }
}

impl<Item: Clone, Error: Clone> Producer for Scripted<Item, Error> {
    type Item = Item;
    type Error = Error;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        self.pulls += 1;

        match self.items.get(self.offset) {
            Some(item) => {
                self.offset += 1;
                Ok(Left(item.clone()))
            }
            None => match &self.last {
                Ok(()) => Ok(Right(Exhausted)),
                Err(err) => Err(err.clone()),
            },
        }
    }
}
