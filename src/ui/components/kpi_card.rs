use dioxus::prelude::*;

use crate::ui::theme::{self, Chrome};

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    delta: Option<String>,
    description: Option<String>,
    chrome: Chrome,
) -> Element {
    rsx! {
        div {
            class: "{theme::panel(chrome)}",
            h3 { class: "metric-title", "{title}" }
            p { class: "metric-value", "{value}" }
            if let Some(delta) = delta {
                span { class: "metric-delta", "▲ {delta}" }
            }
            if let Some(desc) = description {
                p { class: "metric-description", "{desc}" }
            }
        }
    }
}
