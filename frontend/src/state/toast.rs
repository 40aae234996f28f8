//! Transient notification state
//!
//! Validation failures, server error details, and success confirmations all
//! surface through one toast slot rendered by
//! [`crate::components::toast::ToastHost`].

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    /// Distinguishes consecutive toasts with identical text so the host can
    /// restart its dismiss timer.
    pub seq: u64,
}

/// Global toast context
#[derive(Clone, Copy)]
pub struct ToastContext {
    current: RwSignal<Option<Toast>>,
    next_seq: RwSignal<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_seq: RwSignal::new(0),
        }
    }

    pub fn current(&self) -> RwSignal<Option<Toast>> {
        self.current
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Error);
    }

    fn show(&self, message: String, kind: ToastKind) {
        let seq = self.next_seq.get_untracked();
        self.next_seq.set(seq + 1);
        self.current.set(Some(Toast { message, kind, seq }));
    }

    /// Dismiss only if `seq` still identifies the visible toast; a newer
    /// toast keeps its own timer.
    pub fn dismiss(&self, seq: u64) {
        self.current.update(|current| {
            if current.as_ref().map(|toast| toast.seq) == Some(seq) {
                *current = None;
            }
        });
    }
}

pub fn provide_toast_context() -> ToastContext {
    let context = ToastContext::new();
    provide_context(context);
    context
}

pub fn use_toast_context() -> ToastContext {
    expect_context::<ToastContext>()
}
