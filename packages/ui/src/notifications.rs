//! Notification feed context: one refresh at mount, then a 30-second poll.
//!
//! The provider owns the session's [`NotificationFeed`] and is the only
//! place that writes to it. Children read the feed through
//! [`use_notifications`] and mutate it through [`mark_as_read`] /
//! [`mark_all_as_read`], which call the backend first and mirror the change
//! locally only after it acknowledges.

use client::{FeedError, NotificationFeed};
use dioxus::prelude::*;

/// Seconds between background refreshes of the notification list.
const POLL_INTERVAL_SECS: u64 = 30;

/// Get the shared notification feed.
/// Returns a signal that updates whenever the feed changes.
pub fn use_notifications() -> Signal<NotificationFeed> {
    use_context::<Signal<NotificationFeed>>()
}

/// Provider component that owns the notification cache for a dashboard
/// session. Mount it once inside the authenticated shell.
///
/// The feed refreshes immediately, then every [`POLL_INTERVAL_SECS`] for as
/// long as the provider stays mounted; the poll task is dropped with the
/// component scope, so unmounting stops the timer. In-flight requests are
/// not cancelled — a response that loses the race is discarded by the
/// feed's sequence guard instead of overwriting newer state.
#[component]
pub fn NotificationsProvider(children: Element) -> Element {
    let feed = use_signal(NotificationFeed::new);

    // Initial load on mount
    let _ = use_resource(move || async move {
        refresh(feed).await;
    });

    // Poll while mounted
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS))
                    .await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS)).await;

                refresh(feed).await;
            }
        });
    });

    use_context_provider(|| feed);

    rsx! {
        {children}
    }
}

/// Fetch the first page of notifications and apply it to the feed.
///
/// Failures are logged and land the feed in a visible failed state; they
/// never propagate to the caller. The write borrow is released before the
/// request suspends, so a poll tick and a manual refresh can overlap safely.
pub async fn refresh(mut feed: Signal<NotificationFeed>) {
    let seq = feed.write().begin_refresh();
    let result = api::list_notifications(1)
        .await
        .map(|page| page.data)
        .map_err(|err| FeedError::backend(err.to_string()));
    if let Err(ref err) = result {
        tracing::error!("failed to refresh notifications: {err}");
    }
    feed.write().finish_refresh(seq, result);
}

/// Mark one notification read on the backend, then mirror it locally.
pub async fn mark_as_read(mut feed: Signal<NotificationFeed>, id: i64) {
    match api::mark_notification_read(id).await {
        Ok(()) => feed.write().mark_read(id),
        Err(err) => tracing::error!("failed to mark notification {id} read: {err}"),
    }
}

/// Mark every notification read on the backend, then mirror locally.
pub async fn mark_all_as_read(mut feed: Signal<NotificationFeed>) {
    match api::mark_all_notifications_read().await {
        Ok(()) => feed.write().mark_all_read(),
        Err(err) => tracing::error!("failed to mark all notifications read: {err}"),
    }
}
