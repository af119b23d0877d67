//! Consumers that drain a sequence into a value, a collection or a channel.
//!
//! Absence is reported with `Option`/`bool`: `min` of an empty sequence is
//! `None`, not an error.

use std::future::{ready, Future};

use crate::chan::{Receiver, Sender};
use crate::configuration::{Capacity, ChanConfig};
use crate::seq::Seq;

/// Feed every element to `consumer` until it returns `false` or the source
/// is exhausted.
///
/// Returns `true` if the whole source was consumed.
pub async fn for_each_while<T, F>(src: Seq<T>, mut consumer: F) -> bool
where
    T: Send + 'static,
    F: FnMut(T) -> bool,
{
    src.drive(|item| ready(consumer(item))).await
}

/// Collect every element into a container.
pub async fn collect<T, C>(src: Seq<T>) -> C
where
    T: Send + 'static,
    C: Default + Extend<T>,
{
    let mut out = C::default();
    let mut src = src.pull();
    while let Some(item) = src.next().await {
        out.extend(std::iter::once(item));
    }
    out
}

/// Return the first element `predicate` accepts and stop consuming `src`.
pub async fn first<T, P>(src: Seq<T>, mut predicate: P) -> Option<T>
where
    T: Send + 'static,
    P: FnMut(&T) -> bool,
{
    let mut src = src.pull();
    while let Some(item) = src.next().await {
        if predicate(&item) {
            return Some(item);
        }
    }
    None
}

/// Whether any element satisfies `predicate`. Stops at the first match.
pub async fn contains<T, P>(src: Seq<T>, predicate: P) -> bool
where
    T: Send + 'static,
    P: FnMut(&T) -> bool,
{
    first(src, predicate).await.is_some()
}

/// The smallest element, or `None` for an empty source.
///
/// On ties the earliest element wins.
pub async fn min<T>(src: Seq<T>) -> Option<T>
where
    T: Ord + Send + 'static,
{
    reduce(src, None, |acc: Option<T>, item| match acc {
        Some(current) if current <= item => (Some(current), true),
        _ => (Some(item), true),
    })
    .await
}

/// The largest element, or `None` for an empty source.
///
/// On ties the earliest element wins.
pub async fn max<T>(src: Seq<T>) -> Option<T>
where
    T: Ord + Send + 'static,
{
    reduce(src, None, |acc: Option<T>, item| match acc {
        Some(current) if current >= item => (Some(current), true),
        _ => (Some(item), true),
    })
    .await
}

/// Consume the whole source and count its elements.
pub async fn len<T>(src: Seq<T>) -> usize
where
    T: Send + 'static,
{
    let mut count = 0;
    for_each_while(src, |_| {
        count += 1;
        true
    })
    .await;
    count
}

/// Fold `src` from left to right.
///
/// `step` gets the running accumulator and the current element and returns
/// the new accumulator plus whether to keep going. When it says stop, the
/// accumulator it returned in that same call is the result.
pub async fn reduce<T, A, F>(src: Seq<T>, init: A, mut step: F) -> A
where
    T: Send + 'static,
    F: FnMut(A, T) -> (A, bool),
{
    let mut acc = init;
    let mut src = src.pull();
    while let Some(item) = src.next().await {
        let (next, keep_going) = step(acc, item);
        acc = next;
        if !keep_going {
            break;
        }
    }
    acc
}

/// Spawn a task that drains `src` into a channel and return its receiver.
///
/// The task stops, closing the channel, when the source is exhausted, the
/// receiver is dropped or `signal` completes. The signal is raced against
/// both fetching the next element and sending it, but a source that never
/// hands control back cannot be interrupted: make the source itself honor
/// the same cancellation for prompt shutdown.
///
/// Must be called from within a tokio runtime.
pub fn chan<T, S>(src: Seq<T>, signal: S, config: ChanConfig) -> Receiver<T>
where
    T: Send + 'static,
    S: Future<Output = ()> + Send + 'static,
{
    let (tx, rx) = match config.capacity {
        Capacity::Bounded(capacity) => {
            let (tx, rx) = tokio::sync::mpsc::channel(capacity.max(1));
            (Sender::Bounded(tx), Receiver::Bounded(rx))
        }
        Capacity::Unbounded => {
            let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
            (Sender::Unbounded(tx), Receiver::Unbounded(rx))
        }
    };
    tokio::spawn(forward(src, signal, tx));
    rx
}

async fn forward<T, S>(src: Seq<T>, signal: S, tx: Sender<T>)
where
    T: Send + 'static,
    S: Future<Output = ()> + Send + 'static,
{
    let mut src = src.pull();
    tokio::pin!(signal);
    loop {
        let next = tokio::select! {
            biased;
            _ = &mut signal => {
                log::debug!("to::chan cancelled while waiting on its source");
                return;
            }
            next = src.next() => next,
        };
        let Some(item) = next else {
            return;
        };
        tokio::select! {
            biased;
            _ = &mut signal => {
                log::debug!("to::chan cancelled while sending");
                return;
            }
            sent = tx.send(item) => {
                if sent.is_err() {
                    log::debug!("to::chan receiver dropped, stopping source");
                    return;
                }
            }
        }
    }
}
