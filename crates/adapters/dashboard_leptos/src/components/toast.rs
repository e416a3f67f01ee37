//! Toast rendering for the notification queue.
//!
//! The queue itself lives in `hydroview-app`; this component keeps it in a
//! signal and schedules one scoped timer per entry, so dismissing or expiring
//! one toast never affects another's remaining lifetime.

use leptos::prelude::*;
use leptos::task::spawn_local;

use hydroview_app::notifier::NotificationQueue;
use hydroview_domain::notification::{NOTIFICATION_LIFETIME_MS, Notification};
use hydroview_domain::time::now;

/// Reactive context providing notification mutation methods.
#[derive(Clone, Copy)]
pub struct ToastProvider {
    queue: RwSignal<NotificationQueue>,
}

impl ToastProvider {
    /// Push a notification. It auto-dismisses after its fixed lifetime.
    pub fn push(&self, notification: Notification) {
        let id = self
            .queue
            .try_update(|queue| queue.push(notification, now()))
            .unwrap_or_default();

        let queue = self.queue;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTIFICATION_LIFETIME_MS).await;
            queue.update(|queue| queue.dismiss(id));
        });
    }

    /// Dismiss a notification immediately by id.
    pub fn dismiss(&self, id: u32) {
        self.queue.update(|queue| queue.dismiss(id));
    }
}

/// Access the toast provider from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`]
/// ancestor.
pub fn use_toasts() -> ToastProvider {
    use_context::<ToastProvider>().expect("ToastProvider not found in context")
}

/// Container component that provides toast context and renders active toasts.
///
/// Place this once near the root of the component tree (inside `<App/>`).
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let queue = RwSignal::new(NotificationQueue::new());
    let provider = ToastProvider { queue };

    provide_context(provider);

    view! {
        {children()}
        <div class="toast-container">
            {move || {
                queue
                    .get()
                    .entries()
                    .map(|entry| {
                        let id = entry.id;
                        let message = entry.notification.message.clone();
                        let class = format!("toast {}", entry.notification.severity);
                        view! {
                            <div class=class>
                                <button class="toast-dismiss" on:click=move |_| provider.dismiss(id)>
                                    "\u{00D7}"
                                </button>
                                {message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
