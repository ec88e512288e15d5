//! Cancellable simulated requests.
//!
//! The admin screens and public forms fake network latency with a delay.
//! Each delay runs under a [`CancelToken`]; when the owning component goes
//! away it cancels the token and the pending future resolves to
//! [`Cancelled`] straight away, so no state update ever lands after unmount.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

/// Simulated request latency for the various mock operations, in ms.
pub mod latency {
    pub const PAGE_SAVE_MS: u32 = 1000;
    pub const MEDIA_UPLOAD_MS: u32 = 2000;
    pub const NEWSLETTER_MS: u32 = 800;
    pub const CONTACT_MS: u32 = 1000;
    pub const LOGIN_MS: u32 = 600;
    /// Form status messages clear after this long.
    pub const STATUS_RESET_MS: u32 = 3000;
    /// Page editor autosaves this long after the last change.
    pub const AUTOSAVE_MS: u32 = 30_000;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("request cancelled")]
pub struct Cancelled;

#[derive(Default)]
struct TokenState {
    cancelled: bool,
    wakers: Vec<Waker>,
}

/// Shared cancellation flag. Clones observe the same state.
#[derive(Clone, Default)]
pub struct CancelToken {
    state: Rc<RefCell<TokenState>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.borrow().cancelled
    }

    /// Mark cancelled and wake every future waiting on this token.
    pub fn cancel(&self) {
        let wakers = {
            let mut state = self.state.borrow_mut();
            if state.cancelled {
                return;
            }
            state.cancelled = true;
            std::mem::take(&mut state.wakers)
        };
        for waker in wakers {
            waker.wake();
        }
    }

    fn register(&self, waker: &Waker) {
        let mut state = self.state.borrow_mut();
        if !state.wakers.iter().any(|w| w.will_wake(waker)) {
            state.wakers.push(waker.clone());
        }
    }

    /// Wrap `fut` so it resolves to `Err(Cancelled)` once this token is cancelled.
    pub fn run<F: Future>(&self, fut: F) -> Cancellable<F> {
        Cancellable {
            inner: Box::pin(fut),
            token: self.clone(),
        }
    }
}

/// Future returned by [`CancelToken::run`].
pub struct Cancellable<F: Future> {
    inner: Pin<Box<F>>,
    token: CancelToken,
}

impl<F: Future> Future for Cancellable<F> {
    type Output = Result<F::Output, Cancelled>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.token.is_cancelled() {
            return Poll::Ready(Err(Cancelled));
        }
        match self.inner.as_mut().poll(cx) {
            // Cancellation can land while the inner future was pending
            Poll::Ready(_) if self.token.is_cancelled() => Poll::Ready(Err(Cancelled)),
            Poll::Ready(v) => Poll::Ready(Ok(v)),
            Poll::Pending => {
                self.token.register(cx.waker());
                Poll::Pending
            }
        }
    }
}

/// Cancels its token when dropped. Components hold one per in-flight request.
pub struct TaskGuard {
    token: CancelToken,
}

impl TaskGuard {
    pub fn new() -> Self {
        Self { token: CancelToken::new() }
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Default for TaskGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::task::Waker;

    /// Pending until `ready` is set.
    struct Gate {
        ready: Rc<Cell<bool>>,
    }

    impl Future for Gate {
        type Output = u32;

        fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<u32> {
            if self.ready.get() {
                Poll::Ready(7)
            } else {
                Poll::Pending
            }
        }
    }

    fn poll_once<F: Future + Unpin>(fut: &mut F) -> Poll<F::Output> {
        let mut cx = Context::from_waker(Waker::noop());
        Pin::new(fut).poll(&mut cx)
    }

    #[test]
    fn test_completes_when_not_cancelled() {
        let ready = Rc::new(Cell::new(false));
        let token = CancelToken::new();
        let mut fut = token.run(Gate { ready: ready.clone() });
        assert!(poll_once(&mut fut).is_pending());
        ready.set(true);
        assert_eq!(poll_once(&mut fut), Poll::Ready(Ok(7)));
    }

    #[test]
    fn test_cancel_while_pending_resolves_cancelled() {
        let ready = Rc::new(Cell::new(false));
        let token = CancelToken::new();
        let mut fut = token.run(Gate { ready: ready.clone() });
        assert!(poll_once(&mut fut).is_pending());
        token.cancel();
        assert_eq!(poll_once(&mut fut), Poll::Ready(Err(Cancelled)));
    }

    #[test]
    fn test_cancel_racing_completion_wins() {
        let ready = Rc::new(Cell::new(false));
        let token = CancelToken::new();
        let mut fut = token.run(Gate { ready: ready.clone() });
        assert!(poll_once(&mut fut).is_pending());
        ready.set(true);
        token.cancel();
        assert_eq!(poll_once(&mut fut), Poll::Ready(Err(Cancelled)));
    }

    #[test]
    fn test_guard_drop_cancels() {
        let guard = TaskGuard::new();
        let token = guard.token();
        assert!(!token.is_cancelled());
        drop(guard);
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let token = CancelToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }
}
