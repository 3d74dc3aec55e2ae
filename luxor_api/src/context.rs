//! Per-call cancellation and deadline handle.

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Why a call was canceled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The caller canceled the context.
    Requested,
    /// The context's deadline passed.
    DeadlineElapsed,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::Requested => f.write_str("canceled by caller"),
            CancelReason::DeadlineElapsed => f.write_str("deadline exceeded"),
        }
    }
}

/// Cancellation signal plus an optional deadline, passed to every call.
///
/// Clones share the cancellation signal. Once canceled a context stays
/// canceled, and a deadline at or before the current instant counts as
/// canceled too. A context without a deadline never expires on its own.
#[derive(Clone, Debug)]
pub struct CallContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Default for CallContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CallContext {
    /// A context with no deadline that is only canceled explicitly.
    pub fn new() -> Self {
        Self::from_token(CancellationToken::new())
    }

    /// Wraps an existing token, e.g. one shared with a shutdown handler.
    pub fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Sets the deadline, keeping the earlier one if a deadline was already set.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// Sets the deadline to `timeout` from now. A timeout too large to
    /// represent as an instant leaves the deadline unchanged.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// A context canceled whenever this one is, which can also be canceled
    /// on its own without affecting the parent.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline, saturating at zero. `None` without a deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Returns why this context is canceled, or `None` if it is still live.
    pub fn cancel_reason(&self) -> Option<CancelReason> {
        if self.token.is_cancelled() {
            return Some(CancelReason::Requested);
        }
        match self.remaining() {
            Some(remaining) if remaining.is_zero() => Some(CancelReason::DeadlineElapsed),
            _ => None,
        }
    }

    pub fn is_canceled(&self) -> bool {
        self.cancel_reason().is_some()
    }

    /// Completes when the context is canceled or its deadline passes.
    pub async fn done(&self) -> CancelReason {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => CancelReason::Requested,
                    _ = tokio::time::sleep_until(deadline) => CancelReason::DeadlineElapsed,
                }
            }
            None => {
                self.token.cancelled().await;
                CancelReason::Requested
            }
        }
    }
}
