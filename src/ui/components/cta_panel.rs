use dioxus::prelude::*;

use crate::ui::theme::{self, Chrome};

#[component]
pub fn CtaPanel(booking_url: String, chrome: Chrome) -> Element {
    rsx! {
        section {
            class: "{theme::panel(chrome)}",
            h2 { class: "panel-title", "🚀 Ready to Get More 5-Star Reviews?" }
            p {
                strong { "Imagine what just a few more 5-star reviews could do for your business." }
            }
            p { "More trust. More visibility. More customers. More revenue." }
            p { "On this free 30-minute strategy call, we will:" }
            ul {
                class: "checklist",
                li { "Show you exactly how to get more 5-star reviews effortlessly" }
                li { "Reveal how Google's algorithm rewards recent, high-quality reviews" }
                li { "Help you build a simple action plan to grow your business through reputation management" }
            }
            p { strong { "Don't leave revenue on the table." } " Book your free session now!" }
            a {
                class: "btn-cta",
                href: "{booking_url}",
                target: "_blank",
                rel: "noreferrer",
                "📅 Book a Free 30-Minute Strategy Call"
            }
        }
    }
}
