//! Cropping: keep or drop a prefix of a sequence.

use crate::seq::Seq;

/// Emit the first `n` elements of `src`, like `src[..n]`.
///
/// With `n == 0` the source is never started.
pub fn take_n<T>(src: Seq<T>, n: usize) -> Seq<T>
where
    T: Send + 'static,
{
    Seq::new(move |co| async move {
        if n == 0 {
            return;
        }
        let mut src = src.pull();
        for _ in 0..n {
            let Some(item) = src.next().await else {
                return;
            };
            if !co.emit(item).await {
                return;
            }
        }
        src.stop();
    })
}

/// Mirror `src` while `predicate` holds and stop at the first element it
/// rejects. The rejected element is not forwarded.
pub fn take_while<T, P>(src: Seq<T>, mut predicate: P) -> Seq<T>
where
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |item| {
            let accepted = predicate(&item);
            async move { accepted && co.emit(item).await }
        })
        .await;
    })
}

/// Discard the first `n` elements of `src` and forward the rest, like
/// `src[n..]`. A source shorter than `n` yields nothing.
pub fn skip_n<T>(src: Seq<T>, n: usize) -> Seq<T>
where
    T: Send + 'static,
{
    Seq::new(move |co| async move {
        let mut src = src.pull();
        for _ in 0..n {
            if src.next().await.is_none() {
                return;
            }
        }
        while let Some(item) = src.next().await {
            if !co.emit(item).await {
                return;
            }
        }
    })
}

/// Discard elements until `predicate` accepts one, then forward that element
/// and everything after it. `predicate` is not called again after its first
/// `true`.
pub fn skip_until<T, P>(src: Seq<T>, mut predicate: P) -> Seq<T>
where
    T: Send + 'static,
    P: FnMut(&T) -> bool + Send + 'static,
{
    Seq::new(move |co| async move {
        let mut src = src.pull();
        loop {
            let Some(item) = src.next().await else {
                return;
            };
            if predicate(&item) {
                if !co.emit(item).await {
                    return;
                }
                break;
            }
        }
        while let Some(item) = src.next().await {
            if !co.emit(item).await {
                return;
            }
        }
    })
}
