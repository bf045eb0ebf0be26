//! Filter input debouncing
//!
//! Converts a rapid stream of keystrokes into a single committed filter
//! value after a quiet period. The raw input value is the caller's to
//! display immediately; only the committal to the article store is
//! delayed.
//!
//! Two layers: [`DebounceState`] is the pure Idle/Pending machine, tested
//! without any clock; [`FilterDebouncer`] owns the actual timer as an
//! abortable tokio task, so teardown is a first-class cancellation rather
//! than a garbage-collection accident.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Quiet period after the last keystroke before the value commits.
pub const DEBOUNCE_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Pure debounce state machine.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DebounceState {
    /// No commit pending.
    #[default]
    Idle,
    /// A timer is armed; `value` commits when it expires.
    Pending { value: String },
}

impl DebounceState {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Record a keystroke. The caller must (re)arm its timer: any
    /// previously armed timer is superseded.
    pub fn keystroke(&mut self, value: impl Into<String>) {
        *self = Self::Pending {
            value: value.into(),
        };
    }

    /// Timer expiry: commit the accumulated value and return to Idle.
    pub fn expire(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Pending { value } => Some(value),
            Self::Idle => None,
        }
    }

    /// Teardown: discard without committing.
    pub fn cancel(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Pending { value } => Some(value),
            Self::Idle => None,
        }
    }
}

/// Debouncer with an owned, cancellable timer.
///
/// Each call to [`input`](Self::input) supersedes the armed timer; after
/// the quiet period the accumulated value is delivered on the commit
/// channel returned by [`new`](Self::new). Dropping the debouncer aborts
/// the worker, so nothing commits after the consumer is gone.
#[derive(Debug)]
pub struct FilterDebouncer {
    input_tx: mpsc::UnboundedSender<String>,
    worker: JoinHandle<()>,
}

impl FilterDebouncer {
    /// Debouncer with the standard 500 ms quiet period.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        Self::with_quiet_period(DEBOUNCE_QUIET_PERIOD)
    }

    /// Debouncer with a custom quiet period (tests use short ones).
    pub fn with_quiet_period(interval: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (commit_tx, commit_rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_timer(input_rx, commit_tx, interval));
        (Self { input_tx, worker }, commit_rx)
    }

    /// Feed one keystroke's worth of input.
    pub fn input(&self, value: impl Into<String>) {
        // Send fails only when the worker is gone, i.e. after cancel.
        let _ = self.input_tx.send(value.into());
    }

    /// Cancel any armed timer and stop the worker.
    pub fn cancel(&self) {
        self.worker.abort();
    }
}

impl Drop for FilterDebouncer {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

/// Timer worker: drives a [`DebounceState`] from the input stream and a
/// single resettable sleep.
async fn run_timer(
    mut input_rx: mpsc::UnboundedReceiver<String>,
    commit_tx: mpsc::UnboundedSender<String>,
    interval: Duration,
) {
    let mut state = DebounceState::new();
    let sleep = tokio::time::sleep(interval);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            msg = input_rx.recv() => match msg {
                Some(value) => {
                    state.keystroke(value);
                    sleep.as_mut().reset(tokio::time::Instant::now() + interval);
                }
                None => break,
            },
            () = &mut sleep, if state.is_pending() => {
                if let Some(value) = state.expire() {
                    if commit_tx.send(value).is_err() {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    const SHORT: Duration = Duration::from_millis(25);

    #[test]
    fn test_state_machine_transitions() {
        let mut state = DebounceState::new();
        assert!(!state.is_pending());
        assert_eq!(state.expire(), None);

        state.keystroke("b");
        state.keystroke("ba");
        state.keystroke("bal");
        assert!(state.is_pending());

        // One expiry commits the accumulated value exactly once.
        assert_eq!(state.expire(), Some("bal".to_string()));
        assert!(!state.is_pending());
        assert_eq!(state.expire(), None);
    }

    #[test]
    fn test_state_machine_cancel_discards() {
        let mut state = DebounceState::new();
        state.keystroke("bali");
        assert_eq!(state.cancel(), Some("bali".to_string()));
        assert_eq!(state.expire(), None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_rapid_keystrokes_commit_once() {
        let (debouncer, mut commits) = FilterDebouncer::with_quiet_period(SHORT);

        for input in ["b", "ba", "bal", "bali"] {
            debouncer.input(input);
        }

        let committed = timeout(Duration::from_secs(2), commits.recv())
            .await
            .expect("commit should arrive")
            .unwrap();
        assert_eq!(committed, "bali");

        // Exactly one commit for the burst.
        tokio::time::sleep(SHORT * 4).await;
        assert!(commits.try_recv().is_err());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_separate_quiet_periods_commit_separately() {
        let (debouncer, mut commits) = FilterDebouncer::with_quiet_period(SHORT);

        debouncer.input("bali");
        let first = timeout(Duration::from_secs(2), commits.recv())
            .await
            .expect("first commit")
            .unwrap();

        debouncer.input("lombok");
        let second = timeout(Duration::from_secs(2), commits.recv())
            .await
            .expect("second commit")
            .unwrap();

        assert_eq!(first, "bali");
        assert_eq!(second, "lombok");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_teardown_cancels_armed_timer() {
        let (debouncer, mut commits) = FilterDebouncer::with_quiet_period(SHORT);
        debouncer.input("never-committed");
        drop(debouncer);

        tokio::time::sleep(SHORT * 4).await;
        // Channel is closed with nothing delivered.
        assert!(commits.recv().await.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_cancel_is_explicit_operation() {
        let (debouncer, mut commits) = FilterDebouncer::with_quiet_period(SHORT);
        debouncer.input("pending");
        debouncer.cancel();

        tokio::time::sleep(SHORT * 4).await;
        assert!(commits.recv().await.is_none());
    }
}
