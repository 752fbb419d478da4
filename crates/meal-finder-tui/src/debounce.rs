//! Debounced propagation of the search query
//!
//! The raw query changes on every keystroke; filtering should only see it
//! once it has been stable for the configured delay. Each new value replaces
//! the pending timer, so at most one emission is ever in flight.

use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};

use crate::actions::Action;

/// Delays propagation of a changing query until it has been stable for a
/// fixed interval.
///
/// `submit` aborts any pending timer before scheduling a new one, so a
/// superseded value is never observed downstream. Dropping the debouncer
/// aborts the pending timer as well: no emission can outlive its owner.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    tx: mpsc::UnboundedSender<Action>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Schedule `query` for emission after the delay, cancelling whatever was
    /// pending.
    ///
    /// With a zero delay the emission still goes through the scheduler: it
    /// arrives on a later tick of the event loop, never synchronously inside
    /// this call.
    pub fn submit(&mut self, query: String) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Action::DebouncedQueryChanged(query));
        }));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{Instant, advance, sleep};

    fn recv_query(rx: &mut mpsc::UnboundedReceiver<Action>) -> Option<String> {
        match rx.try_recv() {
            Ok(Action::DebouncedQueryChanged(q)) => Some(q),
            _ => None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_emits_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500), tx);

        let submitted_at = Instant::now();
        debouncer.submit("curry".to_string());

        match rx.recv().await {
            Some(Action::DebouncedQueryChanged(q)) => assert_eq!(q, "curry"),
            other => panic!("unexpected action: {other:?}"),
        }
        assert!(submitted_at.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_changes_emit_only_final_value() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500), tx);

        // Keystrokes 100ms apart, all within the 500ms window
        for query in ["c", "cu", "cur", "curr", "curry"] {
            debouncer.submit(query.to_string());
            advance(Duration::from_millis(100)).await;
        }

        match rx.recv().await {
            Some(Action::DebouncedQueryChanged(q)) => assert_eq!(q, "curry"),
            other => panic!("unexpected action: {other:?}"),
        }

        // The superseded values must never show up
        sleep(Duration::from_secs(5)).await;
        assert!(recv_query(&mut rx).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_emission_is_cancelled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500), tx);

        debouncer.submit("beef".to_string());
        advance(Duration::from_millis(499)).await;
        debouncer.submit("lamb".to_string());

        // Past the first value's deadline, nothing has been emitted yet
        advance(Duration::from_millis(2)).await;
        assert!(recv_query(&mut rx).is_none());

        match rx.recv().await {
            Some(Action::DebouncedQueryChanged(q)) => assert_eq!(q, "lamb"),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_emission() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500), tx);

        debouncer.submit("curry".to_string());
        drop(debouncer);

        sleep(Duration::from_secs(5)).await;
        assert!(recv_query(&mut rx).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_is_still_asynchronous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::ZERO, tx);

        debouncer.submit("curry".to_string());
        // Not emitted synchronously within submit
        assert!(recv_query(&mut rx).is_none());

        match rx.recv().await {
            Some(Action::DebouncedQueryChanged(q)) => assert_eq!(q, "curry"),
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
