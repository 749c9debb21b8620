#![allow(clippy::type_complexity)]

//! Pull-based producers of items, lazy adaptors over them, and the operations that drive them to completion.
//!
//! A [`Producer`] hands out one item per call to [`produce`](Producer::produce), until it reports that it is [`Exhausted`] or fails with an error. Producers are created from slices, vectors, maps, iterators, and channels (see the [`producer`] module), and are adapted lazily with [`transform`](producer::transform) and [`map_error`](producer::map_error).
//!
//! Nothing happens until a driver pulls:
//!
//! - [`iterate`] calls a function on every item,
//! - [`reduce`] folds all items into an accumulator,
//! - [`to_vec`] collects all items into a vector, and
//! - [`to_channel`] and [`to_channel_ctx`] send all items on a [`crossbeam_channel`] channel, the latter giving up once a [`Context`] fires.
//!
//! ```
//! use iterate::prelude::*;
//! use iterate::producer::from_slice;
//!
//! let squares = from_slice(&[1, 2, 3]).transform(|x| Ok(x * x));
//! assert_eq!(squares.to_vec(), Ok(vec![1, 4, 9]));
//! ```
//!
//! ## Design Choices
//!
//! - Synchronous, blocking producers; no poll-based interfaces.
//! - Exhaustion is not an error. Every driver treats [`Exhausted`] as successful termination.
//! - Fatal errors, no resumption of processing after an error was signalled. Every driver stops at the first error and returns it unchanged.
//! - Nothing is lost on failure. [`reduce`] returns the last accumulator, [`to_vec`] the items collected so far, and the channel pumps the item they failed to send.
//!
//! ## Module Overview
//!
//! The [`producer`] module defines the [`Producer`] trait, all sources, and all adaptors. The [`Context`] type provides the cancellation signal for the channel bridges.

mod context;
pub use context::{Canceller, Context};

mod drive;
pub use drive::*;

mod errors;
pub use errors::*;

pub mod producer;
pub use producer::{Exhausted, Producer, ProducerExt};

mod pump;
pub use pump::*;

/// Everything you need for working with producers, in a single glob import.
pub mod prelude {
    pub use crate::{
        iterate, producer, reduce, to_channel, to_channel_ctx, to_vec, Cancelled, Canceller,
        CollectError, Context, Exhausted, Producer, ProducerExt, PumpError, ReduceError,
    };

    pub use either::Either::{self, Left, Right};

    pub use core::convert::Infallible;
}
