//! Flattening nested sequences.
//!
//! A stop from the consumer ends both the inner and the outer loop.

use crate::seq::Seq;

/// Emit every element of every inner sequence, in order.
pub fn flatten<T>(src: Seq<Seq<T>>) -> Seq<T>
where
    T: Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |inner| inner.drive(move |item| co.emit(item)))
            .await;
    })
}

/// Like [`flatten`] for sequences of vectors.
pub fn flatten_vec<T>(src: Seq<Vec<T>>) -> Seq<T>
where
    T: Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |items| async move {
            for item in items {
                if !co.emit(item).await {
                    return false;
                }
            }
            true
        })
        .await;
    })
}

/// Like [`flatten`] for paired sequences whose values are sequences. The key
/// is repeated for every element of its inner sequence.
pub fn flatten2<K, V>(src: Seq<(K, Seq<V>)>) -> Seq<(K, V)>
where
    K: Clone + Send + 'static,
    V: Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |(key, inner)| inner.drive(move |value| co.emit((key.clone(), value))))
            .await;
    })
}

/// Emit every element of every source, one source after the other.
pub fn concat<T>(srcs: Vec<Seq<T>>) -> Seq<T>
where
    T: Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        for src in srcs {
            if !src.drive(move |item| co.emit(item)).await {
                return;
            }
        }
    })
}
