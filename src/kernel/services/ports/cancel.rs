//! Cancellation signals for remote operations.
//!
//! A token only tells listeners that cancellation was requested; it never
//! aborts anything locally.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

type Listener = Box<dyn FnOnce() + Send + 'static>;

#[derive(Default)]
struct TokenInner {
    cancelled: AtomicBool,
    listeners: Mutex<Vec<Listener>>,
}

#[derive(Clone)]
pub struct CancellationToken {
    inner: Option<Arc<TokenInner>>,
}

impl CancellationToken {
    /// A token that can never be cancelled.
    pub fn none() -> Self {
        Self { inner: None }
    }

    pub fn is_cancellation_requested(&self) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|inner| inner.cancelled.load(Ordering::Acquire))
    }

    /// Runs `listener` once when cancellation is requested, or right away if it
    /// already was.
    pub fn on_cancellation_requested<F>(&self, listener: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let Some(inner) = self.inner.as_ref() else {
            return;
        };

        {
            let Ok(mut listeners) = inner.listeners.lock() else {
                return;
            };
            if !inner.cancelled.load(Ordering::Acquire) {
                listeners.push(Box::new(listener));
                return;
            }
        }

        listener();
    }
}

impl std::fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationToken")
            .field("cancelled", &self.is_cancellation_requested())
            .finish()
    }
}

pub struct CancellationTokenSource {
    inner: Arc<TokenInner>,
}

impl CancellationTokenSource {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(TokenInner::default()),
        }
    }

    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            inner: Some(self.inner.clone()),
        }
    }

    pub fn cancel(&self) {
        let listeners = {
            let Ok(mut listeners) = self.inner.listeners.lock() else {
                return;
            };
            if self.inner.cancelled.swap(true, Ordering::AcqRel) {
                return;
            }
            std::mem::take(&mut *listeners)
        };

        for listener in listeners {
            listener();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }
}

impl Default for CancellationTokenSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/cancel.rs"]
mod tests;
