//! # Notification feed — client-side cache of the backend notification list
//!
//! The feed is the single source of truth for notifications within a
//! dashboard session. UI components read it through a shared context and
//! mutate it only through the operations defined here.
//!
//! ## Semantics
//!
//! - A successful refresh replaces the cached list wholesale with the
//!   server response; nothing is merged.
//! - A failed refresh clears the cache and leaves the feed in
//!   [`FeedStatus::Failed`], so "failed to load" is distinguishable from
//!   "no notifications".
//! - Mark-read operations call the backend first and mirror the change
//!   locally only after acknowledgement; on failure the cache is left
//!   unchanged and the error is logged.
//! - Refreshes carry a sequence number. A response belonging to an older
//!   refresh than the most recently issued one is discarded, so slow
//!   responses arriving out of order cannot overwrite newer state.

use thiserror::Error;

use crate::models::Notification;

/// Error produced when a backend call fails.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FeedError {
    /// The backend rejected the request or was unreachable.
    #[error("notification backend call failed: {0}")]
    Backend(String),
}

impl FeedError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Outcome of the most recent refresh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedStatus {
    /// No refresh has been issued yet.
    #[default]
    Idle,
    /// A refresh is in flight.
    Loading,
    /// The last refresh succeeded; the cache mirrors the server list.
    Ready,
    /// The last refresh failed; the cache was cleared.
    Failed,
}

/// Backend operations the feed depends on.
///
/// The frontends implement this over Dioxus server functions; tests use an
/// in-memory mock.
pub trait NotificationSource {
    async fn list(&self) -> Result<Vec<Notification>, FeedError>;
    async fn mark_read(&self, id: i64) -> Result<(), FeedError>;
    async fn mark_all_read(&self) -> Result<(), FeedError>;
}

/// Client-side cache of the session user's notification list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationFeed {
    entries: Vec<Notification>,
    status: FeedStatus,
    issued: u64,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached entries in server order.
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FeedStatus::Loading
    }

    /// Number of cached entries not yet marked read.
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    /// Record that a refresh has been issued and return its sequence number.
    ///
    /// The caller passes the number back to [`Self::finish_refresh`] once
    /// the backend responds. Splitting the transition lets UI state
    /// containers avoid holding a write borrow across the suspension point.
    pub fn begin_refresh(&mut self) -> u64 {
        self.issued += 1;
        self.status = FeedStatus::Loading;
        self.issued
    }

    /// Apply the outcome of the refresh issued as `seq`.
    ///
    /// Returns `false` when the response is stale (a newer refresh was
    /// issued while this one was in flight) and was discarded. On success
    /// the server list replaces the cache; on failure the cache is cleared
    /// and the status becomes [`FeedStatus::Failed`].
    pub fn finish_refresh(
        &mut self,
        seq: u64,
        result: Result<Vec<Notification>, FeedError>,
    ) -> bool {
        if seq != self.issued {
            return false;
        }
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.status = FeedStatus::Ready;
            }
            Err(_) => {
                self.entries.clear();
                self.status = FeedStatus::Failed;
            }
        }
        true
    }

    /// Flip a single cached entry to read. Ids not present in the cache,
    /// and entries already read, are left untouched.
    pub fn mark_read(&mut self, id: i64) {
        if let Some(entry) = self.entries.iter_mut().find(|n| n.id == id) {
            entry.read = true;
        }
    }

    /// Flip every cached entry to read.
    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
    }

    /// Fetch the current list from `source` and apply it.
    ///
    /// Failures are logged and swallowed; the feed ends up in
    /// [`FeedStatus::Failed`] instead of propagating an error.
    pub async fn refresh_from<S: NotificationSource>(&mut self, source: &S) {
        let seq = self.begin_refresh();
        let result = source.list().await;
        if let Err(ref err) = result {
            tracing::error!("failed to refresh notifications: {err}");
        }
        self.finish_refresh(seq, result);
    }

    /// Mark one notification read on the backend, then mirror the change
    /// locally. The cache is left unchanged when the backend call fails.
    pub async fn mark_as_read<S: NotificationSource>(&mut self, source: &S, id: i64) {
        match source.mark_read(id).await {
            Ok(()) => self.mark_read(id),
            Err(err) => tracing::error!("failed to mark notification {id} read: {err}"),
        }
    }

    /// Mark every notification read on the backend, then mirror locally.
    pub async fn mark_all_as_read<S: NotificationSource>(&mut self, source: &S) {
        match source.mark_all_read().await {
            Ok(()) => self.mark_all_read(),
            Err(err) => tracing::error!("failed to mark all notifications read: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Scripted NotificationSource backed by shared state.
    #[derive(Clone, Default)]
    struct MemorySource {
        notifications: Arc<Mutex<Vec<Notification>>>,
        fail: Arc<Mutex<bool>>,
    }

    impl MemorySource {
        fn with_entries(entries: Vec<Notification>) -> Self {
            Self {
                notifications: Arc::new(Mutex::new(entries)),
                fail: Arc::new(Mutex::new(false)),
            }
        }

        fn set_entries(&self, entries: Vec<Notification>) {
            *self.notifications.lock().unwrap() = entries;
        }

        fn set_fail(&self, fail: bool) {
            *self.fail.lock().unwrap() = fail;
        }
    }

    impl NotificationSource for MemorySource {
        async fn list(&self) -> Result<Vec<Notification>, FeedError> {
            if *self.fail.lock().unwrap() {
                return Err(FeedError::backend("connection refused"));
            }
            Ok(self.notifications.lock().unwrap().clone())
        }

        async fn mark_read(&self, id: i64) -> Result<(), FeedError> {
            if *self.fail.lock().unwrap() {
                return Err(FeedError::backend("connection refused"));
            }
            if let Some(n) = self
                .notifications
                .lock()
                .unwrap()
                .iter_mut()
                .find(|n| n.id == id)
            {
                n.read = true;
            }
            Ok(())
        }

        async fn mark_all_read(&self) -> Result<(), FeedError> {
            if *self.fail.lock().unwrap() {
                return Err(FeedError::backend("connection refused"));
            }
            for n in self.notifications.lock().unwrap().iter_mut() {
                n.read = true;
            }
            Ok(())
        }
    }

    fn notification(id: i64, read: bool) -> Notification {
        Notification {
            id,
            message: format!("Booking #{id} was updated"),
            date: "Mar  4, 2026 10:00".to_string(),
            read,
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_list_wholesale() {
        let source =
            MemorySource::with_entries(vec![notification(1, false), notification(2, true)]);
        let mut feed = NotificationFeed::new();

        feed.refresh_from(&source).await;
        assert_eq!(feed.entries().len(), 2);
        assert_eq!(feed.status(), FeedStatus::Ready);

        // The server list shrinks; the next refresh must not merge
        source.set_entries(vec![notification(3, false)]);
        feed.refresh_from(&source).await;
        assert_eq!(feed.entries().len(), 1);
        assert_eq!(feed.entries()[0].id, 3);
    }

    #[tokio::test]
    async fn test_failed_refresh_clears_list_and_flags_failure() {
        let source = MemorySource::with_entries(vec![notification(1, false)]);
        let mut feed = NotificationFeed::new();

        feed.refresh_from(&source).await;
        assert_eq!(feed.entries().len(), 1);

        source.set_fail(true);
        feed.refresh_from(&source).await;
        assert!(feed.entries().is_empty());
        assert_eq!(feed.status(), FeedStatus::Failed);
    }

    #[tokio::test]
    async fn test_mark_as_read_is_idempotent() {
        let source =
            MemorySource::with_entries(vec![notification(1, false), notification(2, false)]);
        let mut feed = NotificationFeed::new();
        feed.refresh_from(&source).await;
        assert_eq!(feed.unread_count(), 2);

        feed.mark_as_read(&source, 1).await;
        assert!(feed.entries()[0].read);
        assert_eq!(feed.unread_count(), 1);

        // Second call must not toggle the flag back
        feed.mark_as_read(&source, 1).await;
        assert!(feed.entries()[0].read);
        assert_eq!(feed.unread_count(), 1);
        assert!(!feed.entries()[1].read);
    }

    #[tokio::test]
    async fn test_mark_as_read_failure_leaves_cache_unchanged() {
        let source = MemorySource::with_entries(vec![notification(1, false)]);
        let mut feed = NotificationFeed::new();
        feed.refresh_from(&source).await;

        source.set_fail(true);
        feed.mark_as_read(&source, 1).await;
        assert!(!feed.entries()[0].read);
        assert_eq!(feed.unread_count(), 1);
    }

    #[tokio::test]
    async fn test_mark_all_as_read_flips_every_entry() {
        let source = MemorySource::with_entries(vec![
            notification(1, false),
            notification(2, true),
            notification(3, false),
        ]);
        let mut feed = NotificationFeed::new();
        feed.refresh_from(&source).await;

        feed.mark_all_as_read(&source).await;
        assert!(feed.entries().iter().all(|n| n.read));
        assert_eq!(feed.unread_count(), 0);
    }

    #[tokio::test]
    async fn test_mark_all_as_read_failure_is_a_no_op() {
        let source =
            MemorySource::with_entries(vec![notification(1, false), notification(2, false)]);
        let mut feed = NotificationFeed::new();
        feed.refresh_from(&source).await;

        source.set_fail(true);
        feed.mark_all_as_read(&source).await;
        assert_eq!(feed.unread_count(), 2);
    }

    #[test]
    fn test_stale_refresh_response_is_discarded() {
        let mut feed = NotificationFeed::new();
        let first = feed.begin_refresh();
        let second = feed.begin_refresh();

        // The newer request resolves first
        assert!(feed.finish_refresh(second, Ok(vec![notification(2, false)])));
        assert_eq!(feed.status(), FeedStatus::Ready);

        // The older response arrives late and must not overwrite
        assert!(!feed.finish_refresh(first, Ok(vec![notification(1, false)])));
        assert_eq!(feed.entries().len(), 1);
        assert_eq!(feed.entries()[0].id, 2);
        assert_eq!(feed.status(), FeedStatus::Ready);
    }

    #[test]
    fn test_stale_failure_does_not_clear_newer_state() {
        let mut feed = NotificationFeed::new();
        let first = feed.begin_refresh();
        let second = feed.begin_refresh();

        assert!(feed.finish_refresh(second, Ok(vec![notification(7, false)])));
        assert!(!feed.finish_refresh(first, Err(FeedError::backend("timeout"))));
        assert_eq!(feed.entries().len(), 1);
        assert_eq!(feed.status(), FeedStatus::Ready);
    }

    #[test]
    fn test_unread_count() {
        let mut feed = NotificationFeed::new();
        let seq = feed.begin_refresh();
        feed.finish_refresh(
            seq,
            Ok(vec![
                notification(1, true),
                notification(2, false),
                notification(3, false),
            ]),
        );
        assert_eq!(feed.unread_count(), 2);
    }
}
