use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::CalcError;
use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast info",
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let text = message.into();
    toasts.with_mut(|entries| enqueue(entries, ToastMessage::new(kind, text)));
}

/// Surfaces a rejected calculation, capitalised for display.
pub fn push_calc_error(toasts: Signal<Vec<ToastMessage>>, err: &CalcError) {
    push_toast(toasts, ToastKind::Error, capitalise(&err.to_string()));
}

/// Drops the oldest entry once the queue is full.
fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_VISIBLE {
        entries.remove(0);
    }
    entries.push(message);
}

fn capitalise(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "toasts",
            ul {
                for (id, message) in messages.into_iter().map(|m| (m.id.clone(), m)) {
                    ToastCard { key: "{id}", message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toast_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let mut toasts = toasts;
    let class = message.kind.class();
    let icon = message.kind.icon();
    let target = message.id.clone();
    rsx! {
        li {
            class: "{class}",
            span { "{icon}" }
            p { "{message.text}" }
            button {
                onclick: move |_| {
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_stay_unique_as_the_queue_shifts() {
        // Cards are keyed by id, so surviving toasts keep their own timers.
        let mut entries = Vec::new();
        for n in 0..MAX_VISIBLE + 2 {
            enqueue(&mut entries, ToastMessage::new(ToastKind::Info, format!("toast {n}")));
        }

        assert_eq!(entries.len(), MAX_VISIBLE);
        assert_eq!(entries[0].text, "toast 2");
        let mut ids: Vec<_> = entries.iter().map(|toast| toast.id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), MAX_VISIBLE);
    }

    #[test]
    fn errors_are_capitalised() {
        assert_eq!(capitalise("invalid lifetime value"), "Invalid lifetime value");
        assert_eq!(capitalise(""), "");
    }
}
