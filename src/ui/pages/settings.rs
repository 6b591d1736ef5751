use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, CalcError, FunnelParams, FunnelPreset, FunnelSettings},
    ui::{
        components::toast::{push_calc_error, push_toast, ToastKind, ToastMessage},
        theme::{self, Chrome},
    },
    util::{config::launch_config, version::version_label},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let chrome = Chrome::from_config(launch_config());

    let initial = state.with(|st| st.funnel);
    let mut preset = use_signal(|| initial.preset);
    let mut views_input = use_signal(|| format!("{:.0}", initial.custom.views_per_review));
    let mut conversion_input = use_signal(|| format_percent(initial.custom.conversion_rate));

    let on_apply = {
        let mut state = state;
        move |_| {
            let parsed = parse_custom(views_input(), conversion_input());
            let settings = match (preset(), parsed) {
                (FunnelPreset::Custom, Err(err)) => {
                    push_calc_error(toasts, &err);
                    return;
                }
                (selected, Ok(custom)) => FunnelSettings {
                    preset: selected,
                    custom,
                },
                // Named presets ignore half-typed custom values.
                (selected, Err(_)) => FunnelSettings {
                    preset: selected,
                    custom: state.with(|st| st.funnel.custom),
                },
            };

            state.with_mut(|st| st.funnel = settings);
            persist_user_state(&state);
            log::info!("Funnel set to {:?}", settings.active());
            push_toast(
                toasts,
                ToastKind::Success,
                format!("Using the {} funnel.", settings.preset.name()),
            );
        }
    };

    let on_reset = {
        let mut state = state;
        move |_| {
            let defaults = FunnelSettings::default();
            preset.set(defaults.preset);
            views_input.set(format!("{:.0}", defaults.custom.views_per_review));
            conversion_input.set(format_percent(defaults.custom.conversion_rate));
            state.with_mut(|st| st.funnel = defaults);
            persist_user_state(&state);
            push_toast(toasts, ToastKind::Info, "Restored the standard funnel.");
        }
    };

    let selected = preset();

    rsx! {
        div { class: "{theme::page_class(chrome)}",
            section {
                class: "{theme::panel(chrome)}",
                h2 { class: "panel-title", "Revenue Funnel" }
                div { class: "preset-list",
                    for option in FunnelPreset::ALL {
                        button {
                            class: "{theme::preset_button(option == selected)}",
                            onclick: move |_| preset.set(option),
                            "{option.name()}"
                            small { "{option.description()}" }
                        }
                    }
                }
                if selected == FunnelPreset::Custom {
                    div { class: "field-grid",
                        div { class: "field",
                            label { "Views per review (monthly)" }
                            input {
                                value: views_input(),
                                oninput: move |evt| views_input.set(evt.value()),
                            }
                        }
                        div { class: "field",
                            label { "Conversion rate (%)" }
                            input {
                                value: conversion_input(),
                                oninput: move |evt| conversion_input.set(evt.value()),
                            }
                        }
                    }
                }
                div { class: "actions",
                    button { class: "{theme::btn_primary()}", onclick: on_apply, "Apply" }
                    button { class: "{theme::btn_secondary()}", onclick: on_reset, "Reset Defaults" }
                }
            }

            section {
                class: "{theme::panel(chrome)}",
                h2 { class: "panel-title", "About" }
                p { class: "field-note", "Calculator inputs are never saved. Only the funnel choice above is stored on this machine." }
                p { class: "field-note", "Version {version_label()}" }
            }
        }
    }
}

fn format_percent(rate: f64) -> String {
    let text = format!("{:.2}", rate * 100.0);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn parse_custom(views: String, conversion_percent: String) -> Result<FunnelParams, CalcError> {
    let views_per_review: f64 = views
        .trim()
        .parse()
        .map_err(|_| CalcError::invalid_input("views per review", "must be a number"))?;
    let percent: f64 = conversion_percent
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|_| CalcError::invalid_input("conversion rate", "must be a percentage"))?;

    let params = FunnelParams::new(views_per_review, percent / 100.0);
    params.validate()?;
    Ok(params)
}
