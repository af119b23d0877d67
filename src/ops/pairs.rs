//! Plucking, packing and transforming paired sequences.
//!
//! A paired sequence is a `Seq<(K, V)>`; the helpers here take the two
//! halves as separate arguments so closures read `|k, v| ...` instead of
//! destructuring tuples.

use crate::seq::Seq;

/// A key-value pair produced by [`entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

/// Emit the keys, i.e. the first half of every pair.
pub fn keys<K, V>(src: Seq<(K, V)>) -> Seq<K>
where
    K: Send + 'static,
    V: Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |(k, _)| co.emit(k)).await;
    })
}

/// Emit the values, i.e. the second half of every pair.
pub fn values<K, V>(src: Seq<(K, V)>) -> Seq<V>
where
    K: Send + 'static,
    V: Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |(_, v)| co.emit(v)).await;
    })
}

/// Pack every pair into an [`Entry`].
pub fn entries<K, V>(src: Seq<(K, V)>) -> Seq<Entry<K, V>>
where
    K: Send + 'static,
    V: Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |(key, value)| co.emit(Entry { key, value }))
            .await;
    })
}

/// Like [`map`](super::map) for paired sequences.
pub fn map2<K1, V1, K2, V2, F>(src: Seq<(K1, V1)>, mut f: F) -> Seq<(K2, V2)>
where
    K1: Send + 'static,
    V1: Send + 'static,
    K2: Send + 'static,
    V2: Send + 'static,
    F: FnMut(K1, V1) -> (K2, V2) + Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |(k, v)| co.emit(f(k, v))).await;
    })
}

/// Like [`map`](super::map), turning every element into a pair.
pub fn map12<T, K, V, F>(src: Seq<T>, mut f: F) -> Seq<(K, V)>
where
    T: Send + 'static,
    K: Send + 'static,
    V: Send + 'static,
    F: FnMut(T) -> (K, V) + Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |item| co.emit(f(item))).await;
    })
}

/// Like [`map`](super::map), folding every pair into a single value.
pub fn map21<K, V, T, F>(src: Seq<(K, V)>, mut f: F) -> Seq<T>
where
    K: Send + 'static,
    V: Send + 'static,
    T: Send + 'static,
    F: FnMut(K, V) -> T + Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |(k, v)| co.emit(f(k, v))).await;
    })
}

/// Like [`filter`](super::filter) for paired sequences.
pub fn filter2<K, V, P>(src: Seq<(K, V)>, mut predicate: P) -> Seq<(K, V)>
where
    K: Send + 'static,
    V: Send + 'static,
    P: FnMut(&K, &V) -> bool + Send + 'static,
{
    Seq::new(move |co| async move {
        let co = &co;
        src.drive(move |(k, v)| {
            let accepted = predicate(&k, &v);
            async move { !accepted || co.emit((k, v)).await }
        })
        .await;
    })
}

/// Promote a sequence to a paired one with empty values, e.g. to fill a
/// `HashMap<T, ()>` used as a set.
pub fn empty_values<T>(src: Seq<T>) -> Seq<(T, ())>
where
    T: Send + 'static,
{
    map12(src, |item| (item, ()))
}
