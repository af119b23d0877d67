//! Chainable method forms of the operators and consumers.
//!
//! Each method forwards to the free function of the same name in
//! [`crate::ops`] or [`crate::to`].

use std::future::Future;

use crate::chan::Receiver;
use crate::configuration::ChanConfig;
use crate::ops::{self, Entry};
use crate::seq::Seq;
use crate::to;

impl<T> Seq<T>
where
    T: Send + 'static,
{
    /// Apply `f` to each element.
    pub fn map<U, F>(self, f: F) -> Seq<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        ops::map(self, f)
    }

    /// Turn each element into a key/value pair.
    pub fn map12<K, V, F>(self, f: F) -> Seq<(K, V)>
    where
        K: Send + 'static,
        V: Send + 'static,
        F: FnMut(T) -> (K, V) + Send + 'static,
    {
        ops::map12(self, f)
    }

    /// Keep the elements `predicate` accepts.
    pub fn filter<P>(self, predicate: P) -> Seq<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        ops::filter(self, predicate)
    }

    /// Call `peek` on each element before passing it on.
    pub fn tap<F>(self, peek: F) -> Seq<T>
    where
        F: FnMut(&T) + Send + 'static,
    {
        ops::tap(self, peek)
    }

    /// Emit at most the first `n` elements.
    pub fn take_n(self, n: usize) -> Seq<T> {
        ops::take_n(self, n)
    }

    /// Emit elements while `predicate` holds, then stop.
    pub fn take_while<P>(self, predicate: P) -> Seq<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        ops::take_while(self, predicate)
    }

    /// Drop the first `n` elements.
    pub fn skip_n(self, n: usize) -> Seq<T> {
        ops::skip_n(self, n)
    }

    /// Drop elements until `predicate` first holds, then emit the rest.
    pub fn skip_until<P>(self, predicate: P) -> Seq<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        ops::skip_until(self, predicate)
    }

    /// Pair elements of `self` and `other` until either runs out.
    pub fn zip<U>(self, other: Seq<U>) -> Seq<(T, U)>
    where
        U: Send + 'static,
    {
        ops::zip(self, other)
    }

    /// Emit the elements of `self`, then those of `other`.
    pub fn chain(self, other: Seq<T>) -> Seq<T> {
        ops::concat(vec![self, other])
    }

    /// Pair every element with `()`.
    pub fn empty_values(self) -> Seq<(T, ())> {
        ops::empty_values(self)
    }

    /// Drain into a container.
    pub async fn collect<C>(self) -> C
    where
        C: Default + Extend<T>,
    {
        to::collect(self).await
    }

    /// Feed elements to `consumer` until it returns `false`.
    pub async fn for_each_while<F>(self, consumer: F) -> bool
    where
        F: FnMut(T) -> bool,
    {
        to::for_each_while(self, consumer).await
    }

    /// The first element `predicate` accepts.
    pub async fn first<P>(self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        to::first(self, predicate).await
    }

    /// Count the elements.
    pub async fn len(self) -> usize {
        to::len(self).await
    }

    /// Fold with early stop; see [`to::reduce`].
    pub async fn reduce<A, F>(self, init: A, step: F) -> A
    where
        F: FnMut(A, T) -> (A, bool),
    {
        to::reduce(self, init, step).await
    }

    /// Forward into a channel from a spawned task; see [`to::chan`].
    pub fn into_chan<S>(self, signal: S, config: ChanConfig) -> Receiver<T>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        to::chan(self, signal, config)
    }
}

impl<T> Seq<T>
where
    T: Clone + Send + 'static,
{
    /// Emit every pair of adjacent elements.
    pub fn pair_wise(self) -> Seq<(T, T)> {
        ops::pair_wise(self)
    }
}

impl<T> Seq<T>
where
    T: PartialEq + Clone + Send + 'static,
{
    /// Drop elements equal to the one right before them.
    pub fn deduplicate(self) -> Seq<T> {
        ops::deduplicate(self)
    }
}

impl<K, V> Seq<(K, V)>
where
    K: Send + 'static,
    V: Send + 'static,
{
    /// Keep only the keys.
    pub fn keys(self) -> Seq<K> {
        ops::keys(self)
    }

    /// Keep only the values.
    pub fn values(self) -> Seq<V> {
        ops::values(self)
    }

    /// Wrap each pair in an [`Entry`].
    pub fn entries(self) -> Seq<Entry<K, V>> {
        ops::entries(self)
    }

    /// Map each pair to a new pair.
    pub fn map2<K2, V2, F>(self, f: F) -> Seq<(K2, V2)>
    where
        K2: Send + 'static,
        V2: Send + 'static,
        F: FnMut(K, V) -> (K2, V2) + Send + 'static,
    {
        ops::map2(self, f)
    }

    /// Map each pair to a single value.
    pub fn map21<U, F>(self, f: F) -> Seq<U>
    where
        U: Send + 'static,
        F: FnMut(K, V) -> U + Send + 'static,
    {
        ops::map21(self, f)
    }

    /// Keep the pairs `predicate` accepts.
    pub fn filter2<P>(self, predicate: P) -> Seq<(K, V)>
    where
        P: FnMut(&K, &V) -> bool + Send + 'static,
    {
        ops::filter2(self, predicate)
    }
}

impl<K, V> Seq<(K, Seq<V>)>
where
    K: Clone + Send + 'static,
    V: Send + 'static,
{
    /// Emit every inner value paired with its outer key.
    pub fn flatten2(self) -> Seq<(K, V)> {
        ops::flatten2(self)
    }
}

impl<T> Seq<Seq<T>>
where
    T: Send + 'static,
{
    /// Emit the elements of each inner sequence in turn.
    pub fn flatten(self) -> Seq<T> {
        ops::flatten(self)
    }
}

impl<T> Seq<Vec<T>>
where
    T: Send + 'static,
{
    /// Emit the items of each vector in turn.
    pub fn flatten_vec(self) -> Seq<T> {
        ops::flatten_vec(self)
    }
}

impl<T> Seq<T>
where
    T: Ord + Send + 'static,
{
    /// The smallest element; earliest wins ties.
    pub async fn min(self) -> Option<T> {
        to::min(self).await
    }

    /// The largest element; earliest wins ties.
    pub async fn max(self) -> Option<T> {
        to::max(self).await
    }
}
