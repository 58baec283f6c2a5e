//! Cancellation and deadlines for client operations.
//!
//! Every operation takes a [`Context`]. When the context is cancelled or its
//! deadline passes, the in-flight transport call is dropped and the operation
//! fails with [`HttpError::Cancelled`] or [`HttpError::DeadlineExceeded`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use kong_admin::clients::Context;
//!
//! let (ctx, cancel) = Context::background()
//!     .with_timeout(Duration::from_secs(30))
//!     .with_cancel();
//!
//! // From another task: cancel.cancel();
//! let roles: Vec<RbacRole> = RbacRole::list_all(&client, &ctx, &PathIds::new()).await?;
//! ```

use std::future::{pending, poll_fn, Future};
use std::pin::Pin;
use std::task::Poll;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::clients::errors::HttpError;

/// Carries an optional deadline and an optional cancel signal.
///
/// Contexts are cheap to clone; clones observe the same cancel signals.
/// A derived context is done as soon as any of its ancestors is.
#[derive(Clone, Debug, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancelled: Vec<watch::Receiver<bool>>,
}

/// Cancels every [`Context`] derived from [`Context::with_cancel`].
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    /// Fires the cancel signal. Calling it more than once has no further effect.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a copy of this context that expires after `timeout`.
    ///
    /// An earlier existing deadline is kept.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns a copy of this context that expires at `deadline`.
    ///
    /// An earlier existing deadline is kept.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(self.deadline.map_or(deadline, |d| d.min(deadline)));
        self
    }

    /// Returns a cancellable copy of this context and the handle that cancels it.
    ///
    /// The copy still observes every cancel signal of `self`; the new handle
    /// only cancels the copy and contexts derived from it.
    #[must_use]
    pub fn with_cancel(mut self) -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        self.cancelled.push(receiver);
        (self, CancelHandle { sender })
    }

    /// The deadline, if one is set.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the error this context currently dictates, if any.
    #[must_use]
    pub fn err(&self) -> Option<HttpError> {
        if self.cancelled.iter().any(|rx| *rx.borrow()) {
            return Some(HttpError::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(HttpError::DeadlineExceeded);
        }
        None
    }

    /// Returns `Ok(())` unless the context is already done.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Cancelled`] or [`HttpError::DeadlineExceeded`].
    pub fn check(&self) -> Result<(), HttpError> {
        self.err().map_or(Ok(()), Err)
    }

    /// Drives `future` until it completes or the context is done.
    ///
    /// When the context fires first, `future` is dropped and its work
    /// abandoned.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `future`, or [`HttpError::Cancelled`] /
    /// [`HttpError::DeadlineExceeded`].
    pub async fn run<F, T>(&self, future: F) -> Result<T, HttpError>
    where
        F: Future<Output = Result<T, HttpError>>,
    {
        self.check()?;

        let cancelled = wait_cancelled(&self.cancelled);
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = cancelled => Err(HttpError::Cancelled),
            () = expired => Err(HttpError::DeadlineExceeded),
            result = future => result,
        }
    }
}

type CancelWait = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Resolves once any receiver sees `true`. Never resolves for an empty slice.
async fn wait_cancelled(receivers: &[watch::Receiver<bool>]) {
    let mut waits: Vec<CancelWait> = receivers
        .iter()
        .map(|receiver| {
            let mut receiver = receiver.clone();
            Box::pin(async move {
                if receiver.wait_for(|cancelled| *cancelled).await.is_err() {
                    // Handle dropped without cancelling.
                    pending::<()>().await;
                }
            }) as CancelWait
        })
        .collect();

    poll_fn(|cx| {
        if waits.iter_mut().any(|wait| wait.as_mut().poll(cx).is_ready()) {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    })
    .await;
}
