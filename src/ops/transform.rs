//! Element-wise transforms and the windowing operators built on cursors.

use crate::seq::Seq;

/// Apply `f` to every element until the source is exhausted or the consumer
/// stops.
pub fn map<T, U, F>(src: Seq<T>, mut f: F) -> Seq<U>
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnMut(T) -> U + Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |item| co.emit(f(item))).await;
    })
}

/// Emit the elements `predicate` accepts.
///
/// `predicate` runs once per source element, forwarded or not.
pub fn filter<T, P>(src: Seq<T>, mut predicate: P) -> Seq<T>
where
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |item| {
            let accepted = predicate(&item);
            async move { !accepted || co.emit(item).await }
        })
        .await;
    })
}

/// Call `peek` on every element right before it is forwarded.
///
/// Elements the consumer never asks for are not observed.
pub fn tap<T, F>(src: Seq<T>, mut peek: F) -> Seq<T>
where
    T: Send + 'static,
    F: FnMut(&T) + Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |item| {
            peek(&item);
            co.emit(item)
        })
        .await;
    })
}

/// Emit every element together with the one before it, as a sliding window
/// of two.
///
/// A source of length `L` yields `L - 1` pairs. The source is always one
/// element ahead of what has been forwarded.
pub fn pair_wise<T>(src: Seq<T>) -> Seq<(T, T)>
where
    T: Clone + Send + 'static,
{
    Seq::new(move |co| async move {
        let mut src = src.pull();
        let Some(mut prev) = src.next().await else {
            return;
        };
        while let Some(cur) = src.next().await {
            if !co.emit((prev, cur.clone())).await {
                return;
            }
            prev = cur;
        }
    })
}

/// Pair up the elements of `left` and `right` in lockstep.
///
/// Stops as soon as either side is exhausted, so the output is as long as
/// the shorter input. The longer side may have produced one element that is
/// never forwarded.
pub fn zip<T, U>(left: Seq<T>, right: Seq<U>) -> Seq<(T, U)>
where
    T: Send + 'static,
    U: Send + 'static,
{
    Seq::new(move |co| async move {
        let mut left = left.pull();
        let mut right = right.pull();
        loop {
            let Some(l) = left.next().await else {
                return;
            };
            let Some(r) = right.next().await else {
                return;
            };
            if !co.emit((l, r)).await {
                return;
            }
        }
    })
}

/// Collapse runs of consecutive equal elements into one.
///
/// Only adjacent repeats are removed; `[1, 2, 1]` stays as it is.
pub fn deduplicate<T>(src: Seq<T>) -> Seq<T>
where
    T: PartialEq + Clone + Send + 'static,
{
    Seq::new(move |co| async move {
        let mut src = src.pull();
        let Some(mut prev) = src.next().await else {
            return;
        };
        if !co.emit(prev.clone()).await {
            return;
        }
        while let Some(item) = src.next().await {
            if item == prev {
                continue;
            }
            prev = item.clone();
            if !co.emit(item).await {
                return;
            }
        }
    })
}
