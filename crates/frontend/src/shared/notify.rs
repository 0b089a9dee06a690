//! Transient success/error messages shown in the corner of the screen.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen.
const TOAST_TIMEOUT_MS: u32 = 4_000;
const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Ordered toasts, oldest first; the oldest is dropped past [`MAX_TOASTS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            text: text.into(),
        });
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.remove(0);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Notification service, provided once in `App` via context.
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<ToastQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn show(&self, kind: ToastKind, text: String) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, text));
        let queue = self.queue;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

#[component]
pub fn Toasts() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toast-container">
            <For
                each=move || notifications.queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__text">{toast.text}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut q = ToastQueue::default();
        let a = q.push(ToastKind::Success, "Deleted 2 customers");
        let b = q.push(ToastKind::Error, "boom");
        assert_ne!(a, b);
        q.dismiss(a);
        assert_eq!(q.toasts().len(), 1);
        assert_eq!(q.toasts()[0].text, "boom");
        q.dismiss(a);
        assert_eq!(q.toasts().len(), 1);
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut q = ToastQueue::default();
        for i in 0..MAX_TOASTS + 2 {
            q.push(ToastKind::Success, format!("t{}", i));
        }
        assert_eq!(q.toasts().len(), MAX_TOASTS);
        assert_eq!(q.toasts()[0].text, "t2");
    }
}
