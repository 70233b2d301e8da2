//! Toast notifications
//!
//! Toasts are fire-and-forget. Each carries a key: showing a toast whose key
//! is already on screen replaces it in place, which is how the checkout turns
//! one "loading" toast into the next status line.

use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of toasts on screen at once
const MAX_TOASTS: usize = 5;

/// Milliseconds before success and error toasts fade
#[cfg_attr(feature = "ssr", allow(dead_code))]
const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Loading,
}

impl ToastKind {
    fn auto_dismiss(self) -> bool {
        !matches!(self, ToastKind::Loading)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub key: String,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<VecDeque<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<VecDeque<Toast>> {
        self.toasts
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(None, ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(None, ToastKind::Error, message.into());
    }

    /// Sticky toast that stays until dismissed or replaced under `key`
    pub fn loading(&self, key: &str, message: impl Into<String>) {
        self.show(Some(key.to_string()), ToastKind::Loading, message.into());
    }

    pub fn dismiss(&self, key: &str) {
        self.toasts.update(|t| t.retain(|toast| toast.key != key));
    }

    fn show(&self, key: Option<String>, kind: ToastKind, message: String) {
        let key = key.unwrap_or_else(|| {
            let id = self.next_id.get_untracked();
            self.next_id.set(id + 1);
            format!("toast-{}", id)
        });
        let toast = Toast {
            key: key.clone(),
            kind,
            message,
        };

        self.toasts.update(|t| upsert(t, toast));

        if kind.auto_dismiss() {
            self.schedule_dismiss(key);
        }
    }

    #[cfg(not(feature = "ssr"))]
    fn schedule_dismiss(&self, key: String) {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            service.dismiss(&key);
        });
    }

    #[cfg(feature = "ssr")]
    fn schedule_dismiss(&self, _key: String) {}
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace a toast with the same key, or append and trim the oldest
fn upsert(toasts: &mut VecDeque<Toast>, toast: Toast) {
    if let Some(existing) = toasts.iter_mut().find(|t| t.key == toast.key) {
        *existing = toast;
        return;
    }
    toasts.push_back(toast);
    while toasts.len() > MAX_TOASTS {
        toasts.pop_front();
    }
}

/// Toast stack, mounted once at the app root
#[component]
pub fn ToastContainer(toasts: ToastService) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            <For
                each=move || toasts.toasts().get()
                key=|toast| (toast.key.clone(), toast.message.clone())
                let:toast
            >
                <ToastView toast=toast toasts=toasts />
            </For>
        </div>
    }
}

#[component]
fn ToastView(toast: Toast, toasts: ToastService) -> impl IntoView {
    let (tone_class, icon_path) = match toast.kind {
        ToastKind::Success => (
            "bg-green-500/10 border-green-500/30 text-green-500",
            "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        ToastKind::Error => (
            "bg-red-500/10 border-red-500/30 text-red-500",
            "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        ToastKind::Loading => (
            "bg-blue-500/10 border-blue-500/30 text-blue-500",
            "M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15",
        ),
    };
    let spin = if toast.kind == ToastKind::Loading { " animate-spin" } else { "" };
    let key = toast.key.clone();

    view! {
        <div
            role="status"
            class=format!(
                "flex items-start gap-3 p-4 rounded-lg border backdrop-blur-sm shadow-lg {}",
                tone_class,
            )
        >
            <svg class=format!("w-5 h-5 shrink-0{}", spin) fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
            </svg>
            <p class="flex-1 text-sm text-theme-primary">{toast.message}</p>
            <button
                class="text-theme-muted hover:text-theme-primary transition-colors"
                aria-label="Dismiss"
                on:click=move |_| toasts.dismiss(&key)
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(key: &str, message: &str) -> Toast {
        Toast {
            key: key.to_string(),
            kind: ToastKind::Loading,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_same_key_replaces_in_place() {
        let mut toasts = VecDeque::new();
        upsert(&mut toasts, toast("a", "first"));
        upsert(&mut toasts, toast("processing", "Validating payment information..."));
        upsert(&mut toasts, toast("processing", "Processing payment..."));

        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[1].message, "Processing payment...");
    }

    #[test]
    fn test_oldest_dropped_past_limit() {
        let mut toasts = VecDeque::new();
        for i in 0..MAX_TOASTS + 2 {
            upsert(&mut toasts, toast(&i.to_string(), "x"));
        }
        assert_eq!(toasts.len(), MAX_TOASTS);
        assert_eq!(toasts[0].key, "2");
    }

    #[test]
    fn test_loading_is_sticky() {
        assert!(!ToastKind::Loading.auto_dismiss());
        assert!(ToastKind::Error.auto_dismiss());
    }
}
