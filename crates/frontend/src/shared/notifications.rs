//! One-line user notifications (the warning box under the page header).

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Notifications {
    current: RwSignal<Option<Notice>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn error(&self, text: impl Into<String>) {
        self.current.set(Some(Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        }));
    }

    pub fn success(&self, text: impl Into<String>) {
        self.current.set(Some(Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        }));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.get()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not found in context")
}

#[component]
pub fn NotificationBar() -> impl IntoView {
    let notifications = use_notifications();

    move || {
        notifications.current().map(|notice| {
            let (background, border, color, mark) = match notice.kind {
                NoticeKind::Error => (
                    "var(--color-error-50)",
                    "var(--color-error-100)",
                    "var(--color-error)",
                    "⚠",
                ),
                NoticeKind::Success => (
                    "var(--color-success-50)",
                    "var(--color-success-100)",
                    "var(--color-success-700)",
                    "✓",
                ),
            };
            view! {
                <div
                    class="warning-box"
                    style=format!("background: {}; border-color: {};", background, border)
                    on:click=move |_| notifications.dismiss()
                >
                    <span class="warning-box__icon" style=format!("color: {};", color)>{mark}</span>
                    <span class="warning-box__text" style=format!("color: {};", color)>{notice.text}</span>
                </div>
            }
        })
    }
}
