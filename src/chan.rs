//! Bounded and unbounded tokio channels behind one receiver type.

use futures_core::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

/// Receiving half of a channel bridge.
#[derive(Debug)]
pub enum Receiver<T> {
    Bounded(mpsc::Receiver<T>),
    Unbounded(mpsc::UnboundedReceiver<T>),
}

impl<T> Receiver<T> {
    /// Receive the next value, or `None` once every sender is gone and the
    /// buffer is drained.
    pub async fn recv(&mut self) -> Option<T> {
        match self {
            Receiver::Bounded(rx) => rx.recv().await,
            Receiver::Unbounded(rx) => rx.recv().await,
        }
    }

    pub fn poll_recv(&mut self, cx: &mut Context<'_>) -> Poll<Option<T>> {
        match self {
            Receiver::Bounded(rx) => rx.poll_recv(cx),
            Receiver::Unbounded(rx) => rx.poll_recv(cx),
        }
    }

    /// Close the receiving half without dropping buffered values.
    pub fn close(&mut self) {
        match self {
            Receiver::Bounded(rx) => rx.close(),
            Receiver::Unbounded(rx) => rx.close(),
        }
    }
}

impl<T> From<mpsc::Receiver<T>> for Receiver<T> {
    fn from(rx: mpsc::Receiver<T>) -> Self {
        Receiver::Bounded(rx)
    }
}

impl<T> From<mpsc::UnboundedReceiver<T>> for Receiver<T> {
    fn from(rx: mpsc::UnboundedReceiver<T>) -> Self {
        Receiver::Unbounded(rx)
    }
}

impl<T> Stream for Receiver<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().poll_recv(cx)
    }
}

/// Sending half used by [`crate::to::chan`]'s worker task.
pub(crate) enum Sender<T> {
    Bounded(mpsc::Sender<T>),
    Unbounded(mpsc::UnboundedSender<T>),
}

impl<T> Sender<T> {
    /// Send a value, handing it back if the receiver is gone.
    pub(crate) async fn send(&self, value: T) -> Result<(), T> {
        match self {
            Sender::Bounded(tx) => tx.send(value).await.map_err(|err| err.0),
            Sender::Unbounded(tx) => tx.send(value).map_err(|err| err.0),
        }
    }
}
