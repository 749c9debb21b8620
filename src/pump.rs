//! Operations that pump the items of a producer into a channel.
//!
//! Neither operation ever closes the channel: a [`Sender`] is borrowed, and the caller decides when to drop it. Whenever an item was produced but could not be delivered, the [`PumpError`] hands it back.

use crossbeam_channel::{Select, SendError, Sender};
use either::Either::{Left, Right};
use log::trace;

use crate::{Context, Exhausted, Producer, PumpError};

/// Sends every item of `producer` on `sender`, in production order, blocking while the channel is full.
///
/// Returns `Ok(())` once the producer is exhausted. Returns [`PumpError::Producer`] if the producer fails, and [`PumpError::Disconnected`] if all receivers are gone.
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::from_slice;
///
/// let (tx, rx) = crossbeam_channel::unbounded();
/// assert_eq!(to_channel(from_slice(&[1, 2, 3]), &tx), Ok(()));
/// drop(tx);
///
/// assert_eq!(rx.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn to_channel<P: Producer>(
    mut producer: P,
    sender: &Sender<P::Item>,
) -> Result<(), PumpError<P::Item, P::Error>> {
    loop {
        match producer.produce() {
            Ok(Left(item)) => sender
                .send(item)
                .map_err(|SendError(unsent)| PumpError::Disconnected(unsent))?,
            Ok(Right(Exhausted)) => return Ok(()),
            Err(err) => return Err(PumpError::Producer(err)),
        }
    }
}

/// Sends every item of `producer` on `sender` like [`to_channel`], but gives up once `ctx` fires.
///
/// Every blocking send races against `ctx`. If the context fires first, the item that was waiting to be sent is returned in [`PumpError::Cancelled`], so no item is lost. If the send can complete at the same moment the context has fired, either outcome may be reported.
///
/// The context is only consulted while waiting to send. A producer that blocks inside [`produce`](Producer::produce) is not interrupted; use [`from_channel_ctx`](crate::producer::from_channel_ctx) for sources that should observe the same context.
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::from_slice;
///
/// let (ctx, canceller) = Context::with_cancel();
/// let (tx, _rx) = crossbeam_channel::bounded(0);
///
/// canceller.cancel();
/// let err = to_channel_ctx(from_slice(&[1, 2, 3]), &ctx, &tx).unwrap_err();
/// assert_eq!(err, PumpError::Cancelled { unsent: 1, reason: Cancelled::Requested });
/// ```
pub fn to_channel_ctx<P: Producer>(
    mut producer: P,
    ctx: &Context,
    sender: &Sender<P::Item>,
) -> Result<(), PumpError<P::Item, P::Error>> {
    let timer = ctx.timer();
    let mut delivered: usize = 0;

    loop {
        let item = match producer.produce() {
            Ok(Left(item)) => item,
            Ok(Right(Exhausted)) => return Ok(()),
            Err(err) => return Err(PumpError::Producer(err)),
        };

        let mut sel = Select::new();
        sel.send(sender);

        match ctx.select(&mut sel, &timer) {
            Ok(oper) => {
                oper.send(sender, item)
                    .map_err(|SendError(unsent)| PumpError::Disconnected(unsent))?;
                delivered += 1;
            }
            Err(reason) => {
                trace!("pumping into channel interrupted after {delivered} items: {reason}");
                return Err(PumpError::Cancelled {
                    unsent: item,
                    reason,
                });
            }
        }
    }
}
