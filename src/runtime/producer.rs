use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// An asynchronous sequence of targets.
///
/// A producer emits zero or more values and then ends. Finite animations emit exactly one
/// value (the target after the animation ran); repeating animations emit once per completed
/// iteration and never end. Nothing happens until the producer is polled, and dropping it
/// cancels whatever is in flight.
pub struct Producer<T> {
    inner: BoxStream<'static, T>,
}

impl<T> fmt::Debug for Producer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer").finish_non_exhaustive()
    }
}

impl<T> Producer<T>
where
    T: Send + 'static,
{
    /// Emit `value` once and end.
    pub fn just(value: T) -> Self {
        Self::from_stream(stream::once(future::ready(value)))
    }

    /// End without emitting.
    pub fn empty() -> Self {
        Self::from_stream(stream::empty())
    }

    /// Emit the output of `fut` once it resolves, then end.
    pub fn from_future<F>(fut: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::from_stream(stream::once(fut))
    }

    /// Wrap an arbitrary stream.
    pub fn from_stream<S>(s: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        Self { inner: s.boxed() }
    }

    /// Feed every emitted value into `f` and flatten the resulting producers.
    ///
    /// Inner producers run concurrently with the source and with each other; for a source
    /// that emits once this is plain sequencing.
    pub fn flat_map<F>(self, f: F) -> Self
    where
        F: FnMut(T) -> Producer<T> + Send + 'static,
    {
        Self::from_stream(self.inner.flat_map_unordered(None, f))
    }

    /// Drive the producer to its end and return the last value it emitted.
    ///
    /// Never resolves for producers that never end.
    pub async fn completion(self) -> Option<T> {
        self.inner.fold(None, |_, v| async move { Some(v) }).await
    }
}

impl<T> Producer<T>
where
    T: Clone + Send + 'static,
{
    /// Run this producer once on a spawned task and multicast its values.
    ///
    /// Must be called from within a tokio runtime. Subscribers only see values emitted after
    /// they subscribed; subscribing right after `share` (before yielding) observes the whole run.
    pub fn share(self, capacity: usize) -> SharedProducer<T> {
        let (tx, _) = broadcast::channel(capacity.max(1));
        let slot = Arc::new(Mutex::new(Some(tx.clone())));
        let task_slot = Arc::clone(&slot);
        let task = tokio::spawn(async move {
            let mut source = self;
            let mut emitted = 0u64;
            while let Some(value) = source.next().await {
                emitted += 1;
                // Having no subscribers right now is not an error.
                let _ = tx.send(value);
            }
            task_slot.lock().take();
            tracing::debug!(emitted, "shared producer completed");
        });
        SharedProducer { sender: slot, task }
    }
}

impl<T> Stream for Producer<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.inner.poll_next_unpin(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A single run of a producer observed by any number of subscribers.
///
/// Dropping the handle cancels the run.
pub struct SharedProducer<T> {
    sender: Arc<Mutex<Option<broadcast::Sender<T>>>>,
    task: JoinHandle<()>,
}

impl<T> fmt::Debug for SharedProducer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedProducer")
            .field("finished", &self.task.is_finished())
            .finish_non_exhaustive()
    }
}

impl<T> SharedProducer<T>
where
    T: Clone + Send + 'static,
{
    /// Observe the shared run. Ends when the run ends or is cancelled.
    pub fn subscribe(&self) -> Producer<T> {
        let Some(rx) = self.sender.lock().as_ref().map(broadcast::Sender::subscribe) else {
            return Producer::empty();
        };
        Producer::from_stream(stream::unfold(rx, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(value) => return Some((value, rx)),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "shared producer subscriber lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        }))
    }
}

impl<T> SharedProducer<T> {
    /// Stop the run and end every subscription.
    pub fn cancel(&self) {
        self.task.abort();
        self.sender.lock().take();
    }

    /// True once the run has ended, either naturally or by cancellation.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl<T> Drop for SharedProducer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/producer.rs"]
mod tests;
