use dioxus::prelude::*;

use crate::{
    domain::{funnel_explanation, AppState, CalculatorForm, CalculatorView, Projection, MIN_FORM_LIFETIME_VALUE},
    ui::{
        components::{
            toast::{push_calc_error, ToastMessage},
            CtaPanel, KpiCard, ProgressBar,
        },
        theme::{self, Chrome},
    },
    util::{
        config::launch_config,
        format::{format_count, format_currency, format_rating},
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = launch_config();
    let chrome = Chrome::from_config(config);

    let view = state.with(|st| st.view.clone());
    let (funnel, lifetime_value) = state.with(|st| match &st.view {
        CalculatorView::ShowingResults(projection) => {
            (projection.funnel, Some(projection.lifetime_value))
        }
        CalculatorView::AwaitingInput => (st.funnel.active(), st.form.lifetime_value().ok()),
    });
    let explanation = funnel_explanation(&funnel, lifetime_value);
    let conversion_note = format!(
        "Based on local business benchmarks, a {:.0}% conversion rate from new views is a solid estimate. Businesses with optimized profiles and active reviews often reach 5-10%.",
        funnel.conversion_percent()
    );

    rsx! {
        div { class: "{theme::page_class(chrome)}",
            match view {
                CalculatorView::AwaitingInput => rsx! { InputPanel { state, toasts, chrome } },
                CalculatorView::ShowingResults(projection) => rsx! { ResultsPanel { state, projection, chrome } },
            }

            section {
                class: "{theme::panel(chrome)} explanation",
                h2 { class: "panel-title", "📈 How We Calculate Revenue Increase" }
                ul {
                    for line in explanation {
                        li { "{line}" }
                    }
                }
                p { class: "field-note", "{conversion_note}" }
            }

            CtaPanel { booking_url: config.booking_url.to_string(), chrome }
        }
    }
}

#[component]
fn InputPanel(
    state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    chrome: Chrome,
) -> Element {
    let form = state.with(|st| st.form.clone());
    let mut state_mut = state;

    let on_submit = move |_| {
        let outcome = state_mut.with_mut(|st| st.submit());
        match outcome {
            Ok(projection) => log::info!(
                "Projection ready: {} reviews, {:.2} per month",
                projection.additional_reviews,
                projection.projected_monthly_revenue
            ),
            Err(err) => {
                log::info!("Rejected calculator input: {err}");
                push_calc_error(toasts, &err);
            }
        }
    };

    let on_defaults = move |_| {
        state_mut.with_mut(|st| st.form = CalculatorForm::default());
    };

    rsx! {
        section {
            class: "{theme::panel(chrome)}",
            h2 { class: "panel-title", "Step 1 of 2: Input Your Business Data" }
            div { class: "field-grid",
                div { class: "field",
                    label { "⭐ Current Google Rating" span { class: "value", "{form.current_rating}" } }
                    input {
                        r#type: "range",
                        min: "1",
                        max: "5",
                        step: "0.1",
                        value: "{form.current_rating}",
                        oninput: move |evt| state_mut.with_mut(|st| st.form.current_rating = evt.value()),
                    }
                }
                div { class: "field",
                    label { "🎯 Desired Google Rating" span { class: "value", "{form.target_rating}" } }
                    input {
                        r#type: "range",
                        min: "1",
                        max: "5",
                        step: "0.1",
                        value: "{form.target_rating}",
                        oninput: move |evt| state_mut.with_mut(|st| st.form.target_rating = evt.value()),
                    }
                }
                div { class: "field",
                    label { "📌 Current Number of Google Reviews" }
                    input {
                        r#type: "number",
                        min: "1",
                        step: "1",
                        value: "{form.total_reviews}",
                        oninput: move |evt| state_mut.with_mut(|st| st.form.total_reviews = evt.value()),
                    }
                }
                div { class: "field",
                    label { "💰 Lifetime Customer Value ($)" }
                    input {
                        r#type: "number",
                        min: "{MIN_FORM_LIFETIME_VALUE}",
                        step: "10",
                        value: "{form.lifetime_value}",
                        oninput: move |evt| state_mut.with_mut(|st| st.form.lifetime_value = evt.value()),
                    }
                    p { class: "field-note", "Total revenue one customer brings over the relationship." }
                }
            }
            div { class: "actions",
                button { class: "{theme::btn_primary()}", onclick: on_submit, "Calculate" }
                button { class: "{theme::btn_secondary()}", onclick: on_defaults, "Reset Inputs" }
            }
        }
    }
}

#[component]
fn ResultsPanel(state: Signal<AppState>, projection: Projection, chrome: Chrome) -> Element {
    let mut state_mut = state;
    let target = format_rating(projection.query.target_rating);
    let reviews = format_count(projection.additional_reviews);
    let revenue = format_currency(projection.projected_monthly_revenue);
    let new_average = format!("{:.2}", projection.new_average());
    let customers = format!("{:.1}", projection.monthly_new_customers());
    let summary = if projection.additional_reviews == 0 {
        format!("You're already at or above {target}. Keep the reviews coming!")
    } else {
        format!(
            "{reviews} more 5-star reviews take you from {} across {} reviews to {new_average}.",
            format_rating(projection.query.current_rating),
            format_count(u64::from(projection.query.total_reviews)),
        )
    };

    rsx! {
        section {
            class: "{theme::panel(chrome)}",
            h2 { class: "panel-title", "🔍 Review Growth Insights" }
            div { class: "metrics",
                KpiCard {
                    title: format!("⭐ Reviews Needed to Get to {target}"),
                    value: format!("{reviews} more 5-stars"),
                    delta: Some(format!("+{reviews}")),
                    description: Some(summary),
                    chrome,
                }
                KpiCard {
                    title: "💰 Estimated Monthly Revenue Increase".to_string(),
                    value: revenue,
                    description: Some(format!("~{customers} new customers per month")),
                    chrome,
                }
            }
            ProgressBar { ratio: projection.progress() }
            div { class: "actions",
                button {
                    class: "{theme::btn_secondary()}",
                    onclick: move |_| state_mut.with_mut(|st| st.recalculate()),
                    "↩ Recalculate"
                }
            }
        }
    }
}
