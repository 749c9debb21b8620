use core::fmt::{Debug, Display};
use std::error::Error;

/// Why a [`Context`](crate::Context) fired.
///
/// Reported by the cancellation-aware operations, so that callers can tell an aborted run apart from a producer that simply ran out of items.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Cancelled {
    /// A [`Canceller`](crate::Canceller) cancelled the context.
    #[error("context cancelled")]
    Requested,
    /// The deadline of the context passed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// The error of [`reduce`](crate::reduce): the fold stopped early.
///
/// `U` is the accumulator type, `E` the error type of the fold.
///
/// The `accumulator` is the last one that was computed successfully. The result of the failing fold step is discarded, because there is none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReduceError<U, E> {
    /// The accumulator before the failing step.
    pub accumulator: U,
    /// Why did folding stop?
    pub reason: E,
}

impl<U, E> ReduceError<U, E> {
    /// Consumes `self` and returns `self.reason`, effectively discarding `self.accumulator`.
    pub fn into_reason(self) -> E {
        self.reason
    }
}

impl<U, E> Display for ReduceError<U, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "reducing a producer failed before it was exhausted")
    }
}

impl<U, E> Error for ReduceError<U, E>
where
    U: Debug,
    E: 'static + Error,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.reason)
    }
}

/// The error of [`to_vec`](crate::to_vec): the producer emitted an error before it was exhausted.
///
/// Unlike [`ReduceError`], this keeps *everything* that was produced before the failure: `items` holds the partial collection in production order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectError<T, E> {
    /// All items produced before the error.
    pub items: Vec<T>,
    /// The error emitted by the producer.
    pub reason: E,
}

impl<T, E> CollectError<T, E> {
    /// Consumes `self` and returns `self.reason`, effectively discarding `self.items`.
    pub fn into_reason(self) -> E {
        self.reason
    }
}

impl<T, E> Display for CollectError<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "collecting a producer failed after {} items",
            self.items.len()
        )
    }
}

impl<T, E> Error for CollectError<T, E>
where
    T: Debug,
    E: 'static + Error,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.reason)
    }
}

/// Everything that can go wrong when pumping a producer into a channel.
///
/// Whenever an item was produced but could not be delivered, the variant hands it back instead of dropping it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PumpError<T, E> {
    /// The producer emitted an error. Nothing was sent for this pull.
    Producer(E),
    /// Every receiver of the channel was dropped; the contained item could not be sent.
    Disconnected(T),
    /// The context fired while waiting to send `unsent`.
    Cancelled {
        /// The item that was produced but not sent.
        unsent: T,
        /// Why the context fired.
        reason: Cancelled,
    },
}

impl<T, E> PumpError<T, E> {
    /// Returns the item that was produced but never delivered, if any.
    pub fn into_unsent(self) -> Option<T> {
        match self {
            PumpError::Producer(_) => None,
            PumpError::Disconnected(unsent) => Some(unsent),
            PumpError::Cancelled { unsent, .. } => Some(unsent),
        }
    }
}

impl<T, E> Display for PumpError<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PumpError::Producer(_) => {
                write!(f, "pumping into a channel failed, because the producer emitted an error")
            }
            PumpError::Disconnected(_) => {
                write!(f, "pumping into a channel failed, because the channel is disconnected")
            }
            PumpError::Cancelled { reason, .. } => {
                write!(f, "pumping into a channel stopped: {reason}")
            }
        }
    }
}

impl<T, E> Error for PumpError<T, E>
where
    T: Debug,
    E: 'static + Error,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PumpError::Producer(err) => Some(err),
            PumpError::Disconnected(_) => None,
            PumpError::Cancelled { reason, .. } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_reasons_display_distinctly() {
        assert_eq!(Cancelled::Requested.to_string(), "context cancelled");
        assert_eq!(
            Cancelled::DeadlineExceeded.to_string(),
            "context deadline exceeded"
        );
    }

    #[test]
    fn pump_error_hands_back_unsent_items() {
        let cancelled: PumpError<u8, Cancelled> = PumpError::Cancelled {
            unsent: 7,
            reason: Cancelled::Requested,
        };
        assert_eq!(cancelled.into_unsent(), Some(7));

        let disconnected: PumpError<u8, Cancelled> = PumpError::Disconnected(3);
        assert_eq!(disconnected.into_unsent(), Some(3));

        let failed: PumpError<u8, Cancelled> = PumpError::Producer(Cancelled::Requested);
        assert_eq!(failed.into_unsent(), None);
    }

    #[test]
    fn pump_error_sources_the_cancellation_reason() {
        let err: PumpError<u8, Cancelled> = PumpError::Cancelled {
            unsent: 1,
            reason: Cancelled::DeadlineExceeded,
        };
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("context deadline exceeded"));
    }

    #[test]
    fn collect_error_reports_partial_length() {
        let err = CollectError {
            items: vec![1, 2],
            reason: Cancelled::Requested,
        };
        assert_eq!(err.to_string(), "collecting a producer failed after 2 items");
        assert_eq!(err.into_reason(), Cancelled::Requested);
    }
}
