//! The push-style sequence every operator in this crate produces and consumes.
//!
//! A [`Seq`] is a producer body that is handed a [`Co`] and pushes elements
//! through it one at a time:
//!
//! ```
//! use rs2_seq::{to, Seq};
//!
//! # async fn example() {
//! let evens = Seq::new(|co| async move {
//!     for i in 0.. {
//!         if !co.emit(i * 2).await {
//!             return;
//!         }
//!     }
//! });
//!
//! let first = to::first(evens, |&x| x > 10).await;
//! assert_eq!(first, Some(12));
//! # }
//! ```
//!
//! `co.emit(value).await` resolves to `false` once the consumer has stopped;
//! the body must return as soon as it observes that. Sequences are single
//! use: consuming one moves it.

use futures_util::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll};

use crate::pull::Pull;

type Producer<T> = Box<dyn FnOnce(Co<T>) -> BoxFuture<'static, ()> + Send + 'static>;

/// A lazy, single-use, push-style sequence of `T`.
///
/// Paired sequences are plain `Seq<(K, V)>`.
#[must_use = "sequences do nothing unless they are pulled or consumed"]
pub struct Seq<T> {
    produce: Producer<T>,
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq").finish_non_exhaustive()
    }
}

impl<T> Seq<T>
where
    T: Send + 'static,
{
    /// Create a sequence from a producer body.
    ///
    /// `body` is not called, not even its synchronous part, until the first
    /// element is requested from the sequence.
    pub fn new<F, Fut>(body: F) -> Self
    where
        F: FnOnce(Co<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Seq {
            produce: Box::new(move |co| async move { body(co).await }.boxed()),
        }
    }

    /// Adapt this sequence into a pull cursor.
    ///
    /// The producer is suspended right after each hand-off and only resumed
    /// by the next call to [`Pull::next`].
    pub fn pull(self) -> Pull<T> {
        let slot = Arc::new(Slot::new());
        let producer = (self.produce)(Co {
            slot: Arc::clone(&slot),
        });
        Pull::new(producer, slot)
    }

    /// Forward every element to `step` until the source runs dry or `step`
    /// resolves to `false`.
    ///
    /// Returns `true` when the source was exhausted and `false` when `step`
    /// stopped the iteration. The source is released before returning.
    pub(crate) async fn drive<F, Fut>(self, mut step: F) -> bool
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = bool>,
    {
        let mut src = self.pull();
        while let Some(item) = src.next().await {
            if !step(item).await {
                src.stop();
                return false;
            }
        }
        true
    }
}

impl<T> FromIterator<T> for Seq<T>
where
    T: Send + 'static,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        crate::from::iter(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> From<Vec<T>> for Seq<T>
where
    T: Send + 'static,
{
    fn from(items: Vec<T>) -> Self {
        crate::from::iter(items)
    }
}

/// Hand-off cell shared by a producer body and the cursor driving it.
///
/// Holds at most one element at a time.
pub(crate) struct Slot<T> {
    value: Mutex<Option<T>>,
    stopped: AtomicBool,
}

impl<T> Slot<T> {
    fn new() -> Self {
        Slot {
            value: Mutex::new(None),
            stopped: AtomicBool::new(false),
        }
    }

    fn put(&self, value: T) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
    }

    pub(crate) fn take(&self) -> Option<T> {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    pub(crate) fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    pub(crate) fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// The yield handle given to a producer body.
pub struct Co<T> {
    slot: Arc<Slot<T>>,
}

impl<T> Co<T> {
    /// Hand `value` to the consumer.
    ///
    /// Resolves to `true` when the consumer asks for the next element and to
    /// `false` once it has stopped. After `false` the producer must return.
    pub fn emit(&self, value: T) -> Emit<'_, T> {
        Emit {
            slot: &*self.slot,
            value: Some(value),
        }
    }

    /// Whether the consumer has already stopped this sequence.
    pub fn is_stopped(&self) -> bool {
        self.slot.is_stopped()
    }
}

impl<T> fmt::Debug for Co<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Co")
            .field("stopped", &self.slot.is_stopped())
            .finish()
    }
}

/// Future returned by [`Co::emit`].
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Emit<'a, T> {
    slot: &'a Slot<T>,
    value: Option<T>,
}

// The value is only moved out, never pinned.
impl<T> Unpin for Emit<'_, T> {}

impl<T> Future for Emit<'_, T> {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.slot.is_stopped() {
            return Poll::Ready(false);
        }
        match self.value.take() {
            Some(value) => {
                // Suspend here: the cursor picks the value up and returns it.
                self.slot.put(value);
                Poll::Pending
            }
            None => Poll::Ready(true),
        }
    }
}
