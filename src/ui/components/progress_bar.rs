use dioxus::prelude::*;

/// Horizontal bar filled to `ratio` (clamped to 0.0 - 1.0).
#[component]
pub fn ProgressBar(ratio: f64) -> Element {
    let percent = (ratio.clamp(0.0, 1.0) * 100.0).round();

    rsx! {
        div {
            class: "progress",
            title: "{percent}%",
            div { class: "progress-fill", style: "width: {percent}%" }
        }
    }
}
