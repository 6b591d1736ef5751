use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme::{self, Chrome};
use crate::util::{
    config::launch_config,
    version::{version_label, APP_NAME, APP_TAGLINE, APP_TITLE},
};

#[component]
pub fn Shell(children: Element) -> Element {
    let chrome = Chrome::from_config(launch_config());

    // Hosted in someone else's page: content only.
    if !chrome.shows_chrome() {
        return rsx! { {children} };
    }

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        header {
            class: "site-header",
            div { class: "inner",
                div {
                    h1 { class: "site-title", "🚀 {APP_TITLE}" }
                    p { class: "site-subtitle", "{APP_TAGLINE}" }
                }
                nav { class: "nav",
                    NavButton {
                        active: matches!(current_route, Route::Calculator {}),
                        onclick: move |_| { nav.push(Route::Calculator {}); },
                        label: "🧮 Calculator",
                    }
                    NavButton {
                        active: matches!(current_route, Route::Settings {}),
                        onclick: move |_| { nav.push(Route::Settings {}); },
                        label: "⚙️ Settings",
                    }
                }
            }
        }
        main { {children} }
        footer { class: "site-footer", "{APP_NAME} {version_label()}" }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
