//! Toast host - renders the current notification and auto-dismisses it

use leptos::prelude::*;

use crate::state::toast::{use_toast_context, ToastKind};

const DISMISS_AFTER_MS: u32 = 4000;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast_context();
    let current = toasts.current();

    // Each new toast restarts the dismiss timer; an older timer firing late
    // is ignored because the sequence number no longer matches
    Effect::new(move || {
        if let Some(toast) = current.get() {
            let seq = toast.seq;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
                toasts.dismiss(seq);
            });
        }
    });

    view! {
        {move || current.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="status">
                    {toast.message}
                </div>
            }
        })}
    }
}
