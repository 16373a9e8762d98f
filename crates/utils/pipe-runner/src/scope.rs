use std::fmt;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Why a scope's cancellation signal fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The scope, or one of its ancestors, was cancelled explicitly.
    Cancelled,
    /// The scope's deadline passed.
    DeadlineExceeded,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::Cancelled => write!(f, "cancelled"),
            CancelReason::DeadlineExceeded => write!(f, "deadline exceeded"),
        }
    }
}

/// An owned cancellation scope with parent/child propagation and an
/// optional deadline.
///
/// Cancelling a scope reaches every scope derived from it; cancelling a
/// child never affects its parent. Dropping the scope cancels its token,
/// so whoever holds it releases it exactly once on every exit path.
pub struct ExecScope {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl ExecScope {
    /// Fresh root scope with no deadline.
    pub fn root() -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: None,
        }
    }

    /// Root scope whose signal also fires once `timeout` has elapsed.
    pub fn with_deadline(timeout: Duration) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Derive a child scope. The child inherits the parent's deadline.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Derive a child scope with its own timeout; the earlier of the
    /// inherited deadline and the new one wins.
    pub fn child_with_deadline(&self, timeout: Duration) -> Self {
        let requested = Instant::now() + timeout;
        let deadline = match self.deadline {
            Some(inherited) if inherited < requested => inherited,
            _ => requested,
        };

        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// A token clone for cancelling or observing this scope from other
    /// tasks without holding the scope itself.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Wait until the scope resolves and report why: explicit cancellation
    /// (own or inherited) or deadline expiry, whichever is observed first.
    pub async fn cancelled(&self) -> CancelReason {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = self.token.cancelled() => self.reason(),
                    _ = tokio::time::sleep_until(deadline) => CancelReason::DeadlineExceeded,
                }
            }
            None => {
                self.token.cancelled().await;
                CancelReason::Cancelled
            }
        }
    }

    fn reason(&self) -> CancelReason {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => CancelReason::DeadlineExceeded,
            _ => CancelReason::Cancelled,
        }
    }
}

impl Drop for ExecScope {
    fn drop(&mut self) {
        // cancel() is idempotent, so an explicit cancel before drop still
        // releases the scope exactly once.
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_explicit_and_idempotent() {
        let scope = ExecScope::root();
        assert!(!scope.is_cancelled());

        scope.cancel();
        scope.cancel();
        assert!(scope.is_cancelled());
    }

    #[test]
    fn test_parent_cancel_reaches_child() {
        let parent = ExecScope::root();
        let child = parent.child();

        parent.cancel();
        assert!(child.is_cancelled());
    }

    #[test]
    fn test_child_cancel_leaves_parent_untouched() {
        let parent = ExecScope::root();
        let child = parent.child();

        child.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());
    }

    #[test]
    fn test_drop_releases_scope() {
        let parent = ExecScope::root();
        let child = parent.child();
        let observer = child.token();

        drop(child);
        assert!(observer.is_cancelled());
        assert!(!parent.is_cancelled());
    }

    #[test]
    fn test_child_inherits_earlier_deadline() {
        let parent = ExecScope::with_deadline(Duration::from_millis(10));
        let child = parent.child_with_deadline(Duration::from_secs(3600));

        assert_eq!(child.deadline(), parent.deadline());

        let sibling = parent.child();
        assert_eq!(sibling.deadline(), parent.deadline());
    }

    #[tokio::test]
    async fn test_cancelled_reports_explicit_reason() {
        let scope = ExecScope::root();
        let token = scope.token();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            token.cancel();
        });

        assert_eq!(scope.cancelled().await, CancelReason::Cancelled);
    }

    #[tokio::test]
    async fn test_cancelled_reports_deadline_reason() {
        let scope = ExecScope::with_deadline(Duration::from_millis(10));
        assert_eq!(scope.cancelled().await, CancelReason::DeadlineExceeded);
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(CancelReason::Cancelled.to_string(), "cancelled");
        assert_eq!(
            CancelReason::DeadlineExceeded.to_string(),
            "deadline exceeded"
        );
    }
}
