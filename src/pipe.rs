//! Reusable sequence transformations.
//!
//! Operators in [`crate::ops`] consume the sequence they wrap. A [`Pipe`]
//! captures the transformation itself, so the same chain of operators can be
//! built once and applied to many sources.

use std::sync::Arc;

use crate::ops;
use crate::seq::Seq;

/// A transformation from `Seq<I>` to `Seq<O>` that can be applied any number
/// of times.
pub struct Pipe<I, O> {
    f: Arc<dyn Fn(Seq<I>) -> Seq<O> + Send + Sync + 'static>,
}

impl<I, O> Clone for Pipe<I, O> {
    fn clone(&self) -> Self {
        Pipe {
            f: Arc::clone(&self.f),
        }
    }
}

impl<I, O> Pipe<I, O> {
    /// Wrap a sequence-to-sequence function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Seq<I>) -> Seq<O> + Send + Sync + 'static,
    {
        Pipe { f: Arc::new(f) }
    }

    /// Build the transformed sequence. Nothing runs until it is consumed.
    pub fn apply(&self, input: Seq<I>) -> Seq<O> {
        (self.f)(input)
    }
}

/// Pipe form of [`ops::map`].
pub fn map<I, O, F>(f: F) -> Pipe<I, O>
where
    F: Fn(I) -> O + Send + Sync + Clone + 'static,
    I: Send + 'static,
    O: Send + 'static,
{
    Pipe::new(move |input| ops::map(input, f.clone()))
}

/// Pipe form of [`ops::filter`].
pub fn filter<I, F>(predicate: F) -> Pipe<I, I>
where
    F: Fn(&I) -> bool + Send + Sync + Clone + 'static,
    I: Send + 'static,
{
    Pipe::new(move |input| ops::filter(input, predicate.clone()))
}

/// Chain two pipes: the output of `p1` is the input of `p2`.
pub fn compose<I, M, O>(p1: Pipe<I, M>, p2: Pipe<M, O>) -> Pipe<I, O>
where
    I: Send + 'static,
    M: Send + 'static,
    O: Send + 'static,
{
    Pipe::new(move |input| p2.apply(p1.apply(input)))
}

/// Pipe form of [`ops::take_n`].
pub fn take_n<I>(n: usize) -> Pipe<I, I>
where
    I: Send + 'static,
{
    Pipe::new(move |input| ops::take_n(input, n))
}

/// Pipe form of [`ops::skip_n`].
pub fn skip_n<I>(n: usize) -> Pipe<I, I>
where
    I: Send + 'static,
{
    Pipe::new(move |input| ops::skip_n(input, n))
}

/// Pass every sequence through unchanged
pub fn identity<I>() -> Pipe<I, I>
where
    I: Send + 'static,
{
    Pipe::new(|input| input)
}

/// Method-call form of [`compose`].
pub trait PipeExt<I, O> {
    fn compose<P>(self, other: Pipe<O, P>) -> Pipe<I, P>
    where
        P: Send + 'static;
}

impl<I, O> PipeExt<I, O> for Pipe<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    fn compose<P>(self, other: Pipe<O, P>) -> Pipe<I, P>
    where
        P: Send + 'static,
    {
        compose(self, other)
    }
}
