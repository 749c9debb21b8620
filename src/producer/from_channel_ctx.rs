use core::fmt::Debug;
use std::time::Instant;

use crossbeam_channel::{Receiver, Select};
use either::Either::{self, Left, Right};
use log::trace;

use crate::producer::Invariant;
use crate::{Cancelled, Context, Exhausted, Producer};

/// Produces the messages received on a channel until a [`Context`] fires.
///
/// See [`from_channel_ctx`].
pub struct FromChannelCtx<T>(Invariant<ReceiveCtx<T>>);

/// Creates a producer that receives from `receiver`, racing every receive against `ctx`.
///
/// Each call to [`produce`](Producer::produce) blocks until a message arrives, the channel is disconnected and drained ([`Exhausted`]), or `ctx` fires (an error carrying the [`Cancelled`] reason). If a message is ready at the same time as `ctx` has fired, either outcome may be reported.
///
/// Once the channel was reported as exhausted, the producer stays exhausted, regardless of the context.
///
/// ```
/// use iterate::prelude::*;
/// use iterate::producer::from_channel_ctx;
///
/// let (ctx, canceller) = Context::with_cancel();
/// let (tx, rx) = crossbeam_channel::unbounded::<u8>();
///
/// let mut p = from_channel_ctx(ctx, rx);
/// canceller.cancel();
/// assert_eq!(p.produce(), Err(Cancelled::Requested));
/// # drop(tx);
/// ```
pub fn from_channel_ctx<T>(ctx: Context, receiver: Receiver<T>) -> FromChannelCtx<T> {
    let timer = ctx.timer();
    FromChannelCtx(Invariant::new(ReceiveCtx {
        receiver,
        ctx,
        timer,
        exhausted: false,
    }))
}

impl<T> FromChannelCtx<T> {
    /// Returns the context this producer races against.
    pub fn context(&self) -> &Context {
        &self.0.as_ref().ctx
    }
}

invarianted_impl_debug!(FromChannelCtx<T>);
invarianted_impl_wrapper!(FromChannelCtx<T>; Receiver<T>);
invarianted_impl_producer!(FromChannelCtx<T>; Item T; Error Cancelled);

struct ReceiveCtx<T> {
    receiver: Receiver<T>,
    ctx: Context,
    timer: Receiver<Instant>,
    exhausted: bool,
}

impl<T> Debug for ReceiveCtx<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FromChannelCtx")
            .field("receiver", &self.receiver)
            .field("ctx", &self.ctx)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

impl<T> ReceiveCtx<T> {
    fn into_inner(self) -> Receiver<T> {
        self.receiver
    }
}

impl<T> Producer for ReceiveCtx<T> {
    type Item = T;
    type Error = Cancelled;

    fn produce(&mut self) -> Result<Either<Self::Item, Exhausted>, Self::Error> {
        if self.exhausted {
            return Ok(Right(Exhausted));
        }

        let mut sel = Select::new();
        sel.recv(&self.receiver);

        let oper = self.ctx.select(&mut sel, &self.timer).inspect_err(|reason| {
            trace!("receive from channel interrupted: {reason}");
        })?;

        match oper.recv(&self.receiver) {
            Ok(item) => Ok(Left(item)),
            Err(_) => {
                self.exhausted = true;
                Ok(Right(Exhausted))
            }
        }
    }
}
