//! Transient Notifications
//!
//! Success/error toasts shown top-center and auto-dismissed after a short
//! delay. The handle lives at the app root, so messages survive navigation.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;

/// How long a toast stays on screen
const TOAST_DURATION_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast signals provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: ReadSignal<u64>,
    set_next_id: WriteSignal<u64>,
}

/// Get the toast handle from context
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

impl Toasts {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        let (next_id, set_next_id) = signal(0u64);
        Self {
            toasts,
            set_toasts,
            next_id,
            set_next_id,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    /// Report an API failure. `Unauthorized` is skipped: the session
    /// invalidation path already surfaced it.
    pub fn api_error(&self, err: &ApiError, fallback: &str) {
        if matches!(err, ApiError::Unauthorized) {
            return;
        }
        self.error(err.user_message(fallback));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.set_next_id.set(id + 1);
        self.set_toasts.update(|list| list.push(Toast { id, kind, message }));

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            set_toasts.update(|list| list.retain(|toast| toast.id != id));
        });
    }
}
