//! Operations that drive a producer until it is exhausted or fails.
//!
//! All of them pull one item at a time and handle it before pulling the next, and all of them stop at the first error. They differ in what they hand back alongside an error:
//!
//! - [`iterate`] hands back only the error.
//! - [`reduce`] hands back the accumulator from *before* the failing step.
//! - [`to_vec`] hands back *every* item collected before the failure.

use either::Either::{Left, Right};

use crate::{CollectError, Exhausted, Producer, ReduceError};

/// Calls `consume` on every item of `producer`, in order.
///
/// Returns `Ok(())` once the producer is exhausted. Returns the first error of either the producer or `consume`; no further items are pulled after that. With `E = P::Error`, producer errors are returned unchanged.
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::from_slice;
///
/// let mut sum = 0;
/// let res: Result<(), Infallible> = iterate(from_slice(&[1, 2, 3]), |x| {
///     sum += x;
///     Ok(())
/// });
///
/// assert_eq!(res, Ok(()));
/// assert_eq!(sum, 6);
/// ```
pub fn iterate<P, F, E>(mut producer: P, mut consume: F) -> Result<(), E>
where
    P: Producer,
    F: FnMut(P::Item) -> Result<(), E>,
    E: From<P::Error>,
{
    loop {
        match producer.produce()? {
            Left(item) => consume(item)?,
            Right(Exhausted) => return Ok(()),
        }
    }
}

/// Folds the items of `producer` into an accumulator, left to right in production order.
///
/// `fold` receives each item together with the current accumulator and returns the next accumulator. It borrows the accumulator, so that when it fails, the previous accumulator can be returned in the [`ReduceError`]. The same holds when the producer fails.
///
/// Because `fold` only borrows the accumulator, a fold that extends an owned accumulator such as a `Vec` or a `String` has to clone it on every step, which makes collect-style folds quadratic. Use [`to_vec`], or [`iterate`] pushing into a variable of the caller, for those.
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::from_slice;
///
/// let total = reduce(from_slice(&[1, 2, 3]), 0, |x, acc| Ok::<_, Infallible>(acc + x));
/// assert_eq!(total, Ok(6));
///
/// let err = reduce(from_slice(&[1, 2, 3]).fallible::<&str>(), 0, |x, acc| {
///     if x == 3 { Err("three") } else { Ok(acc + x) }
/// });
/// assert_eq!(err, Err(ReduceError { accumulator: 3, reason: "three" }));
/// ```
pub fn reduce<P, U, F, E>(mut producer: P, init: U, mut fold: F) -> Result<U, ReduceError<U, E>>
where
    P: Producer,
    F: FnMut(P::Item, &U) -> Result<U, E>,
    E: From<P::Error>,
{
    let mut accumulator = init;

    loop {
        match producer.produce() {
            Ok(Left(item)) => match fold(item, &accumulator) {
                Ok(next) => accumulator = next,
                Err(reason) => return Err(ReduceError { accumulator, reason }),
            },
            Ok(Right(Exhausted)) => return Ok(accumulator),
            Err(err) => {
                return Err(ReduceError {
                    accumulator,
                    reason: err.into(),
                })
            }
        }
    }
}

/// Collects all items of `producer` into a vector, in production order.
///
/// If the producer fails, the items collected so far are kept in the [`CollectError`].
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::{from_slice, TestProducerBuilder};
///
/// assert_eq!(to_vec(from_slice(&[1, 2, 4])), Ok(vec![1, 2, 4]));
///
/// let failing = TestProducerBuilder::new(vec![1, 2], Err("oops")).build();
/// assert_eq!(to_vec(failing), Err(CollectError { items: vec![1, 2], reason: "oops" }));
/// ```
pub fn to_vec<P: Producer>(mut producer: P) -> Result<Vec<P::Item>, CollectError<P::Item, P::Error>> {
    let mut items = Vec::new();

    loop {
        match producer.produce() {
            Ok(Left(item)) => items.push(item),
            Ok(Right(Exhausted)) => return Ok(items),
            Err(reason) => return Err(CollectError { items, reason }),
        }
    }
}
