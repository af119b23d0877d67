//! Pull cursors over push-style sequences.
//!
//! [`Pull`] turns a [`Seq`](crate::Seq) inside out: instead of the producer
//! pushing every element into a callback, the caller asks for one element at
//! a time with [`Pull::next`]. The producer runs lazily and is parked right
//! after each hand-off, so at most one element is ever in flight.
//!
//! Lookahead operators (`take_n`, `skip_n`, `skip_until`, `pair_wise`, `zip`,
//! `deduplicate`) are all written on top of this one adapter.

use futures::task::noop_waker_ref;
use futures_core::Stream;
use futures_util::future::{poll_fn, BoxFuture};
use std::fmt;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use crate::seq::Slot;

/// An explicit "give me the next element" cursor adapted from a sequence.
///
/// The cursor must be released exactly once. [`Pull::stop`] does that
/// explicitly; dropping the cursor does it implicitly, so early returns and
/// unwinding release it too.
pub struct Pull<T> {
    producer: Option<BoxFuture<'static, ()>>,
    slot: Arc<Slot<T>>,
    started: bool,
}

impl<T> Pull<T> {
    pub(crate) fn new(producer: BoxFuture<'static, ()>, slot: Arc<Slot<T>>) -> Self {
        Pull {
            producer: Some(producer),
            slot,
            started: false,
        }
    }

    /// Fetch the next element, or `None` once the sequence is exhausted or
    /// the cursor has been stopped.
    ///
    /// After the first `None` every later call returns `None` as well.
    pub async fn next(&mut self) -> Option<T> {
        poll_fn(|cx| self.poll_item(cx)).await
    }

    /// Poll-based form of [`Pull::next`].
    pub fn poll_item(&mut self, cx: &mut Context<'_>) -> Poll<Option<T>> {
        let Some(producer) = self.producer.as_mut() else {
            return Poll::Ready(None);
        };
        self.started = true;
        match producer.as_mut().poll(cx) {
            Poll::Ready(()) => {
                self.producer = None;
                Poll::Ready(self.slot.take())
            }
            Poll::Pending => match self.slot.take() {
                Some(item) => Poll::Ready(Some(item)),
                // The producer is waiting on something other than us.
                None => Poll::Pending,
            },
        }
    }

    /// Release the cursor early.
    ///
    /// A producer parked in `emit` is resumed once with `false` so it can
    /// return on its own, then it is dropped together with anything it still
    /// owns. A producer that was never pulled is dropped without running.
    /// Calling `stop` more than once is a no-op.
    pub fn stop(&mut self) {
        let Some(mut producer) = self.producer.take() else {
            return;
        };
        self.slot.stop();
        // Never re-enter user code while a panic is already unwinding.
        if self.started && !std::thread::panicking() {
            let mut cx = Context::from_waker(noop_waker_ref());
            if producer.as_mut().poll(&mut cx).is_pending() {
                log::trace!("pull cursor stopped while its producer was waiting on I/O");
            }
        }
        drop(producer);
        drop(self.slot.take());
    }

    /// Whether the cursor has been exhausted or stopped.
    pub fn is_done(&self) -> bool {
        self.producer.is_none()
    }
}

impl<T> Drop for Pull<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<T> Stream for Pull<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().poll_item(cx)
    }
}

impl<T> fmt::Debug for Pull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pull")
            .field("done", &self.is_done())
            .finish()
    }
}
