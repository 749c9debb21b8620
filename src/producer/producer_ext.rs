use core::convert::Infallible;

use crossbeam_channel::Sender;

use crate::producer::{MapError, Transform};
use crate::{CollectError, Context, Producer, PumpError, ReduceError};

impl<P> ProducerExt for P where P: Producer {}

/// An extension trait for [`Producer`] that provides method forms of the adaptors and drivers of this crate.
/// You never need to implement this trait yourself, it merely adds methods with default implementation to existing producers.
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::from_slice;
///
/// let total = from_slice(&[1, 2, 3])
///     .transform(|x| Ok(x * 2))
///     .reduce(0, |x, acc| Ok::<_, Infallible>(acc + x));
/// assert_eq!(total, Ok(12));
/// ```
pub trait ProducerExt: Producer {
    /// Borrows a producer, so that a driver can consume the borrow while the caller keeps the producer.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Turns a producer that cannot fail into one whose error type is `E`.
    ///
    /// Drivers convert producer errors into the error type of the closure they call, which requires `E: From<Self::Error>`. Most error types do not implement `From<Infallible>`, so infallible producers go through this method first.
    ///
    /// ```
    /// use iterate::prelude::*;
    /// use iterate::producer::from_slice;
    ///
    /// let res = from_slice(&[1, 2, 3]).fallible::<&str>().iterate(|x| {
    ///     if x == 2 { Err("two") } else { Ok(()) }
    /// });
    /// assert_eq!(res, Err("two"));
    /// ```
    fn fallible<E>(self) -> MapError<Self, fn(Infallible) -> E>
    where
        Self: Sized + Producer<Error = Infallible>,
    {
        let unreachable: fn(Infallible) -> E = |never| match never {};
        crate::producer::map_error(self, unreachable)
    }

    /// See [`transform`](crate::producer::transform).
    fn transform<U, F>(self, fun: F) -> Transform<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<U, Self::Error>,
    {
        crate::producer::transform(self, fun)
    }

    /// See [`map_error`](crate::producer::map_error).
    fn map_error<E, F>(self, fun: F) -> MapError<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Error) -> E,
    {
        crate::producer::map_error(self, fun)
    }

    /// See [`iterate`](crate::iterate).
    fn iterate<F, E>(self, consume: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<(), E>,
        E: From<Self::Error>,
    {
        crate::iterate(self, consume)
    }

    /// See [`reduce`](crate::reduce).
    fn reduce<U, F, E>(self, init: U, fold: F) -> Result<U, ReduceError<U, E>>
    where
        Self: Sized,
        F: FnMut(Self::Item, &U) -> Result<U, E>,
        E: From<Self::Error>,
    {
        crate::reduce(self, init, fold)
    }

    /// See [`to_vec`](crate::to_vec).
    fn to_vec(self) -> Result<Vec<Self::Item>, CollectError<Self::Item, Self::Error>>
    where
        Self: Sized,
    {
        crate::to_vec(self)
    }

    /// See [`to_channel`](crate::to_channel).
    fn to_channel(
        self,
        sender: &Sender<Self::Item>,
    ) -> Result<(), PumpError<Self::Item, Self::Error>>
    where
        Self: Sized,
    {
        crate::to_channel(self, sender)
    }

    /// See [`to_channel_ctx`](crate::to_channel_ctx).
    fn to_channel_ctx(
        self,
        ctx: &Context,
        sender: &Sender<Self::Item>,
    ) -> Result<(), PumpError<Self::Item, Self::Error>>
    where
        Self: Sized,
    {
        crate::to_channel_ctx(self, ctx, sender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use either::Either::{Left, Right};

    use crate::producer::{from_slice, TestProducerBuilder};
    use crate::Exhausted;

    #[test]
    fn by_ref_leaves_the_rest_to_the_caller() {
        let mut p = from_slice(&[1, 2, 3, 4]);

        let mut seen = vec![];
        let res: Result<(), &str> = p.by_ref().fallible::<&str>().iterate(|x| {
            seen.push(x);
            if x == 2 {
                Err("stop")
            } else {
                Ok(())
            }
        });

        assert_eq!(res, Err("stop"));
        assert_eq!(seen, vec![1, 2]);
        assert_eq!(p.produce(), Ok(Left(3)));
    }

    #[test]
    fn map_error_unifies_error_types_for_transform() {
        let p = TestProducerBuilder::new(vec![1u8, 2], Ok(())).build();
        let mut p = p
            .map_error(|()| String::from("source failed"))
            .transform(|x| {
                if x > 1 {
                    Err(format!("{x} is too large"))
                } else {
                    Ok(x)
                }
            });

        assert_eq!(p.produce(), Ok(Left(1)));
        assert_eq!(p.produce(), Err(String::from("2 is too large")));
    }

    #[test]
    fn to_vec_method_collects_everything() {
        let p = from_slice(&["u", "f", "o"]).transform(|s| Ok(s.to_uppercase()));
        assert_eq!(p.to_vec(), Ok(vec!["U".to_string(), "F".to_string(), "O".to_string()]));
        assert_eq!(from_slice::<u8>(&[]).produce(), Ok(Right(Exhausted)));
    }
}
