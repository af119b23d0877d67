//! Constructors and bridges that produce sequences.
//!
//! Besides the plain constructors (`iter`, `once`, `empty`, `from_fn`,
//! `stream`) this module adapts three outside sources:
//!
//! - [`chan`]: a tokio `mpsc` receiver, raced against a cancellation signal
//! - [`scanner_lines`]: any `AsyncBufRead`, split into lines
//! - [`dir_walk`]: a recursive directory traversal backed by `walkdir`,
//!   run on tokio's blocking pool

use futures_core::Stream;
use futures_util::StreamExt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use walkdir::WalkDir;

use crate::chan::Receiver;
use crate::configuration::WalkConfig;
use crate::error::{SeqError, SeqResult};
use crate::seq::{Co, Seq};

/// Create a sequence from a producer body. Same as [`Seq::new`].
pub fn from_fn<T, F, Fut>(body: F) -> Seq<T>
where
    T: Send + 'static,
    F: FnOnce(Co<T>) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Seq::new(body)
}

/// Emit every item of `items`, in order.
pub fn iter<I>(items: I) -> Seq<I::Item>
where
    I: IntoIterator + Send + 'static,
    I::IntoIter: Send,
    I::Item: Send + 'static,
{
    Seq::new(move |co| async move {
        for item in items {
            if !co.emit(item).await {
                return;
            }
        }
    })
}

/// Emit a single element
pub fn once<T>(item: T) -> Seq<T>
where
    T: Send + 'static,
{
    Seq::new(move |co| async move {
        co.emit(item).await;
    })
}

/// A sequence that completes immediately
pub fn empty<T>() -> Seq<T>
where
    T: Send + 'static,
{
    Seq::new(|_co| async {})
}

/// Emit every item of an async stream, in order.
pub fn stream<S>(s: S) -> Seq<S::Item>
where
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
{
    Seq::new(move |co| async move {
        let mut s = Box::pin(s);
        while let Some(item) = s.next().await {
            if !co.emit(item).await {
                return;
            }
        }
    })
}

/// Emit every value received on `rx`.
///
/// Stops as soon as the channel is closed and drained, or `signal`
/// completes, whichever happens first. Every receive races both.
pub fn chan<T, R, S>(rx: R, signal: S) -> Seq<T>
where
    T: Send + 'static,
    R: Into<Receiver<T>>,
    S: Future<Output = ()> + Send + 'static,
{
    let rx: Receiver<T> = rx.into();
    Seq::new(move |co| async move {
        let mut rx = rx;
        tokio::pin!(signal);
        loop {
            let received = tokio::select! {
                biased;
                _ = &mut signal => None,
                received = rx.recv() => received,
            };
            let Some(item) = received else {
                return;
            };
            if !co.emit(item).await {
                return;
            }
        }
    })
}

/// Error state of a reader wrapped by [`scanner_lines`].
///
/// The line sequence ends silently when the reader fails; check
/// [`ScanStatus::err`] once the sequence is done.
#[derive(Debug, Clone, Default)]
pub struct ScanStatus {
    err: Arc<Mutex<Option<SeqError>>>,
}

impl ScanStatus {
    /// The error that ended the scan, if any.
    pub fn err(&self) -> Option<SeqError> {
        self.err
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, err: SeqError) {
        *self.err.lock().unwrap_or_else(PoisonError::into_inner) = Some(err);
    }
}

/// Emit every line read from `reader`, without line terminators.
///
/// Cancellation is done by closing the reader or stopping the sequence. A
/// read error ends the sequence like end of input does; it is only reported
/// through the returned [`ScanStatus`].
pub fn scanner_lines<R>(reader: R) -> (Seq<String>, ScanStatus)
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let status = ScanStatus::default();
    let recorder = status.clone();
    let lines = Seq::new(move |co| async move {
        let mut lines = reader.lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if !co.emit(line).await {
                        return;
                    }
                }
                Ok(None) => return,
                Err(err) => {
                    recorder.set(err.into());
                    return;
                }
            }
        }
    });
    (lines, status)
}

/// One step of a [`dir_walk`].
#[derive(Debug, Clone)]
pub struct DirStep {
    /// The path anchored at the walk root, i.e. `root` joined with the
    /// entry's relative path.
    pub full_path: PathBuf,
    pub entry: walkdir::DirEntry,
}

impl DirStep {
    pub fn is_dir(&self) -> bool {
        self.entry.file_type().is_dir()
    }

    pub fn depth(&self) -> usize {
        self.entry.depth()
    }
}

/// Emit every entry under `root`, `root` itself included.
///
/// Errors are forwarded in place of the step that failed and the walk goes
/// on; the consumer decides whether to stop. The traversal runs on tokio's
/// blocking pool and hands steps over through a one-slot channel, so the
/// sequence must be pulled inside a tokio runtime. Stopping the sequence
/// closes that channel, which aborts the traversal.
pub fn dir_walk(root: impl AsRef<Path>, config: WalkConfig) -> Seq<SeqResult<DirStep>> {
    let root = root.as_ref().to_path_buf();
    Seq::new(move |co| async move {
        let (tx, mut rx) = mpsc::channel(1);
        let walker = tokio::task::spawn_blocking(move || walk_blocking(&root, &config, &tx));
        while let Some(step) = rx.recv().await {
            if !co.emit(step).await {
                return;
            }
        }
        if let Err(err) = walker.await {
            log::debug!("dir_walk worker failed: {}", err);
        }
    })
}

/// Walk `root` on the current thread, sending each step to `tx`.
///
/// Returns the number of steps delivered. Stops once the receiver is gone.
fn walk_blocking(root: &Path, config: &WalkConfig, tx: &mpsc::Sender<SeqResult<DirStep>>) -> usize {
    let mut walker = WalkDir::new(root)
        .follow_links(config.follow_links)
        .min_depth(config.min_depth);
    if let Some(max_depth) = config.max_depth {
        walker = walker.max_depth(max_depth);
    }
    if config.sort_by_file_name {
        walker = walker.sort_by_file_name();
    }

    let mut sent = 0;
    for step in walker {
        let step = match step {
            Ok(entry) => Ok(DirStep {
                full_path: entry.path().to_path_buf(),
                entry,
            }),
            Err(err) => {
                log::debug!("dir_walk under {}: {}", root.display(), err);
                Err(SeqError::from(err))
            }
        };
        if tx.blocking_send(step).is_err() {
            log::trace!("dir_walk under {} aborted after {} steps", root.display(), sent);
            return sent;
        }
        sent += 1;
    }
    sent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn walk_blocking_aborts_when_receiver_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..50 {
            std::fs::write(dir.path().join(format!("file{:02}.txt", i)), "x").unwrap();
        }

        let (tx, mut rx) = mpsc::channel(1);
        let root = dir.path().to_path_buf();
        let walker = tokio::task::spawn_blocking(move || {
            walk_blocking(&root, &WalkConfig::default(), &tx)
        });
        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_some());
        drop(rx);

        // Two received, at most one buffered; the blocked send then fails.
        let sent = walker.await.unwrap();
        assert!(sent <= 3, "walker delivered {} of 51 steps", sent);
    }

    #[test]
    fn walk_blocking_delivers_every_step() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("a.txt"), "a").unwrap();

        let (tx, mut rx) = mpsc::channel(8);
        let sent = walk_blocking(dir.path(), &WalkConfig::default(), &tx);
        drop(tx);

        let mut received = 0;
        while let Ok(step) = rx.try_recv() {
            assert!(step.is_ok());
            received += 1;
        }
        assert_eq!(sent, 3);
        assert_eq!(received, 3);
    }
}
