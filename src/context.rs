//! A one-shot cancellation signal for the blocking channel bridges.
//!
//! A [`Context`] fires at most once, either because its [`Canceller`] was used or because its deadline passed. The channel-bridging operations ([`from_channel_ctx`](crate::producer::from_channel_ctx) and [`to_channel_ctx`](crate::to_channel_ctx)) race their blocking receive or send against the context, so a fired context unblocks them without any polling and without spawning threads.

use core::convert::Infallible;
use core::fmt::Debug;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::{Duration, Instant};

use crossbeam_channel::{at, bounded, never, Receiver, Select, SelectedOperation, Sender};
use log::debug;

use crate::Cancelled;

/// A cheaply clonable handle to a cancellation signal.
///
/// All clones observe the same signal. The first reason to fire wins and is reported by every later call to [`err`](Context::err).
///
/// The receiver returned by [`done`](Context::done) disconnects as soon as the context is cancelled. A passed deadline only disconnects it once some operation observed the deadline, so code that blocks on its own should wait on the deadline as well:
///
/// ```
/// use std::time::Duration;
/// use crossbeam_channel::{at, never, select};
/// use iterate::{Cancelled, Context};
///
/// let (ctx, _canceller) = Context::with_timeout(Duration::from_millis(5));
/// let deadline = ctx.deadline().map(at).unwrap_or_else(never);
///
/// select! {
///     recv(ctx.done()) -> _ => {}
///     recv(deadline) -> _ => {}
/// }
/// assert_eq!(ctx.err(), Some(Cancelled::DeadlineExceeded));
/// ```
///
/// ```
/// use iterate::{Cancelled, Context};
///
/// let (ctx, canceller) = Context::with_cancel();
/// assert_eq!(ctx.err(), None);
///
/// canceller.cancel();
/// assert_eq!(ctx.err(), Some(Cancelled::Requested));
/// assert!(ctx.done().recv().is_err());
/// ```
#[derive(Clone)]
pub struct Context(Arc<Signal>);

struct Signal {
    /// Disconnects once the sender in `trigger` is dropped. Nothing is ever sent.
    done: Receiver<Infallible>,
    trigger: Mutex<Option<Sender<Infallible>>>,
    reason: OnceLock<Cancelled>,
    deadline: Option<Instant>,
}

impl Context {
    /// Returns a context that never fires.
    pub fn background() -> Self {
        Context(Arc::new(Signal {
            done: never(),
            trigger: Mutex::new(None),
            reason: OnceLock::new(),
            deadline: None,
        }))
    }

    /// Returns a context that fires when the returned [`Canceller`] is used.
    pub fn with_cancel() -> (Self, Canceller) {
        Self::armed(None)
    }

    /// Returns a context that fires when the returned [`Canceller`] is used, or once `deadline` has passed, whichever happens first.
    ///
    /// ```
    /// use std::time::Instant;
    /// use iterate::{Cancelled, Context};
    ///
    /// let (ctx, _canceller) = Context::with_deadline(Instant::now());
    /// assert_eq!(ctx.err(), Some(Cancelled::DeadlineExceeded));
    /// ```
    pub fn with_deadline(deadline: Instant) -> (Self, Canceller) {
        Self::armed(Some(deadline))
    }

    /// Returns a context that fires when the returned [`Canceller`] is used, or once `timeout` has elapsed, whichever happens first.
    pub fn with_timeout(timeout: Duration) -> (Self, Canceller) {
        Self::with_deadline(Instant::now() + timeout)
    }

    fn armed(deadline: Option<Instant>) -> (Self, Canceller) {
        let (trigger, done) = bounded(0);
        let ctx = Context(Arc::new(Signal {
            done,
            trigger: Mutex::new(Some(trigger)),
            reason: OnceLock::new(),
            deadline,
        }));

        (ctx.clone(), Canceller(ctx))
    }

    /// Returns a receiver that becomes ready (disconnected) once the context has fired.
    ///
    /// A passed deadline is only reflected here after some operation observed it, for example a call to [`err`](Context::err) or a blocked channel bridge waking up at the deadline. Use [`deadline`](Context::deadline) together with [`crossbeam_channel::at`] to wait for the deadline itself.
    pub fn done(&self) -> &Receiver<Infallible> {
        &self.0.done
    }

    /// Returns the deadline of this context, if it has one.
    pub fn deadline(&self) -> Option<Instant> {
        self.0.deadline
    }

    /// Returns why the context fired, or `None` if it has not fired yet.
    pub fn err(&self) -> Option<Cancelled> {
        if let Some(reason) = self.0.reason.get() {
            return Some(*reason);
        }

        match self.0.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(self.expire()),
            _ => None,
        }
    }

    /// Returns whether the context has fired.
    pub fn is_done(&self) -> bool {
        self.err().is_some()
    }

    /// Returns a timer that delivers a message at the deadline, or never.
    pub(crate) fn timer(&self) -> Receiver<Instant> {
        match self.0.deadline {
            Some(deadline) => at(deadline),
            None => never(),
        }
    }

    /// Completes `sel`, which must already contain exactly one operation, unless the context fires first.
    ///
    /// When the operation and the context are ready at the same time, the choice between them is made by [`Select`], which picks among ready operations at random. Callers must not rely on either outcome.
    ///
    /// `timer` must be a timer obtained from [`Context::timer`].
    pub(crate) fn select<'a>(
        &'a self,
        sel: &mut Select<'a>,
        timer: &'a Receiver<Instant>,
    ) -> Result<SelectedOperation<'a>, Cancelled> {
        let done = sel.recv(&self.0.done);
        let expiry = sel.recv(timer);

        let oper = sel.select();
        match oper.index() {
            i if i == done => {
                let _ = oper.recv(&self.0.done);
                Err(self.cause())
            }
            i if i == expiry => {
                let _ = oper.recv(timer);
                Err(self.expire())
            }
            _ => Ok(oper),
        }
    }

    fn expire(&self) -> Cancelled {
        self.fire(Cancelled::DeadlineExceeded);
        self.cause()
    }

    fn cause(&self) -> Cancelled {
        // The reason is recorded before `done` disconnects.
        self.0
            .reason
            .get()
            .copied()
            .unwrap_or(Cancelled::Requested)
    }

    fn fire(&self, reason: Cancelled) {
        let _ = self.0.reason.set(reason);

        let trigger = self
            .0
            .trigger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if trigger.is_some() {
            debug!("context fired: {}", self.cause());
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}

impl Debug for Context {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Context")
            .field("deadline", &self.0.deadline)
            .field("reason", &self.0.reason.get())
            .finish()
    }
}

/// Fires a [`Context`].
///
/// Dropping a `Canceller` does *not* fire the context.
#[derive(Clone, Debug)]
pub struct Canceller(Context);

impl Canceller {
    /// Fires the context with [`Cancelled::Requested`]. Has no effect if the context has already fired.
    pub fn cancel(&self) {
        self.0.fire(Cancelled::Requested);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::thread;

    #[test]
    fn background_never_fires() {
        let ctx = Context::background();
        assert_eq!(ctx.err(), None);
        assert!(!ctx.is_done());
        assert!(ctx.done().try_recv().is_err());
    }

    #[test]
    fn cancel_disconnects_done_for_all_clones() {
        let (ctx, canceller) = Context::with_cancel();
        let other = ctx.clone();

        assert!(!other.is_done());
        canceller.cancel();

        assert!(ctx.done().recv().is_err());
        assert!(other.done().recv().is_err());
        assert_eq!(other.err(), Some(Cancelled::Requested));
    }

    #[test]
    fn cancelling_twice_keeps_first_reason() {
        let (ctx, canceller) = Context::with_deadline(Instant::now());
        assert_eq!(ctx.err(), Some(Cancelled::DeadlineExceeded));

        canceller.cancel();
        assert_eq!(ctx.err(), Some(Cancelled::DeadlineExceeded));
    }

    #[test]
    fn dropping_the_canceller_does_not_fire() {
        let (ctx, canceller) = Context::with_cancel();
        drop(canceller);
        assert_eq!(ctx.err(), None);
    }

    #[test]
    fn cancel_wakes_a_blocked_select() {
        let (ctx, canceller) = Context::with_cancel();
        let (_tx, rx) = bounded::<u8>(0);

        thread::scope(|s| {
            s.spawn(|| canceller.cancel());

            let timer = ctx.timer();
            let mut sel = Select::new();
            sel.recv(&rx);
            assert_eq!(ctx.select(&mut sel, &timer).err(), Some(Cancelled::Requested));
        });
    }

    #[test]
    fn waiting_on_done_and_deadline_returns_past_the_deadline() {
        let (ctx, _canceller) = Context::with_timeout(Duration::from_millis(10));
        let deadline = ctx.deadline().map(at).unwrap_or_else(never);

        let mut sel = Select::new();
        sel.recv(ctx.done());
        sel.recv(&deadline);
        let _ = sel.ready();

        assert!(Instant::now() >= ctx.deadline().unwrap());
        assert_eq!(ctx.err(), Some(Cancelled::DeadlineExceeded));
        assert!(ctx.done().recv().is_err());
    }

    #[test]
    fn deadline_wakes_a_blocked_select() {
        let (ctx, _canceller) = Context::with_timeout(Duration::from_millis(10));
        let (_tx, rx) = bounded::<u8>(0);

        let timer = ctx.timer();
        let mut sel = Select::new();
        sel.recv(&rx);
        assert_eq!(
            ctx.select(&mut sel, &timer).err(),
            Some(Cancelled::DeadlineExceeded)
        );

        // The expiry is now visible through `done` as well.
        assert!(ctx.done().recv().is_err());
    }
}
