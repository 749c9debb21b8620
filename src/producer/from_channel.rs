use core::convert::Infallible;
use core::fmt::Debug;

use crossbeam_channel::Receiver;
use either::Either::{self, Left, Right};

use crate::producer::Invariant;
use crate::{Exhausted, Producer};

/// Produces the messages received on a channel, in arrival order.
///
/// See [`from_channel`].
pub struct FromChannel<T>(Invariant<Receive<T>>);

/// Creates a producer that receives from `receiver`.
///
/// Each call to [`produce`](Producer::produce) blocks the calling thread until a message arrives, or until the channel is disconnected and drained, which is reported as [`Exhausted`].
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::from_channel;
///
/// let (tx, rx) = crossbeam_channel::unbounded();
/// tx.send(1).unwrap();
/// tx.send(2).unwrap();
/// drop(tx);
///
/// let mut p = from_channel(rx);
/// assert_eq!(p.produce(), Ok(Left(1)));
/// assert_eq!(p.produce(), Ok(Left(2)));
/// assert_eq!(p.produce(), Ok(Right(Exhausted)));
/// ```
pub fn from_channel<T>(receiver: Receiver<T>) -> FromChannel<T> {
    FromChannel(Invariant::new(Receive(receiver)))
}

invarianted_impl_debug!(FromChannel<T>);
invarianted_impl_wrapper!(FromChannel<T>; Receiver<T>);
invarianted_impl_producer!(FromChannel<T>; Item T; Error Infallible);

struct Receive<T>(Receiver<T>);

impl<T> Debug for Receive<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("FromChannel").field(&self.0).finish()
    }
}

impl<T> Receive<T> {
    fn into_inner(self) -> Receiver<T> {
        self.0
    }
}

impl<T> Producer for Receive<T> {
    type Item = T;
    type Error = Infallible;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        match self.0.recv() {
            Ok(item) => Ok(Left(item)),
            Err(_) => Ok(Right(Exhausted)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::thread;

    use crossbeam_channel::bounded;

    #[test]
    fn blocks_until_a_message_arrives() {
        let (tx, rx) = bounded(0);
        let mut p = from_channel(rx);

        thread::scope(|s| {
            s.spawn(move || {
                for i in 0..3u8 {
                    tx.send(i).unwrap();
                }
            });

            assert_eq!(p.produce(), Ok(Left(0)));
            assert_eq!(p.produce(), Ok(Left(1)));
            assert_eq!(p.produce(), Ok(Left(2)));
            assert_eq!(p.produce(), Ok(Right(Exhausted)));
            assert_eq!(p.produce(), Ok(Right(Exhausted)));
        });
    }

    #[test]
    fn drains_buffered_messages_after_disconnect() {
        let (tx, rx) = bounded(4);
        tx.send("u").unwrap();
        tx.send("fo").unwrap();
        drop(tx);

        let mut p = from_channel(rx);
        assert_eq!(p.produce(), Ok(Left("u")));
        assert_eq!(p.produce(), Ok(Left("fo")));
        assert_eq!(p.produce(), Ok(Right(Exhausted)));
    }
}
