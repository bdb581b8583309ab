//! On-demand store/SKU summary fetched from `GET /insights`.

#[cfg(test)]
#[path = "insight_summary_test.rs"]
mod insight_summary_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{InsightsResponse, SkuSales, StoreAvailability};
use crate::state::summary::SummaryState;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn InsightSummary() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let state = RwSignal::new(SummaryState::default());

    let alive = StoredValue::new(Arc::new(AtomicBool::new(true)));
    let alive_cleanup = alive.get_value();
    on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

    let on_load = move |_| {
        let mut started = false;
        state.update(|s| started = s.begin());
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            let alive = alive.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_insights(&config).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("insights request failed: {e}");
                }
                if alive.load(Ordering::Relaxed) {
                    state.update(|s| s.finish(result));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (config, alive);
    };

    view! {
        <section class="insight-summary">
            <div class="insight-summary__header">
                <h3>"Store & SKU Summary"</h3>
                <button class="btn insight-summary__load" on:click=on_load disabled=move || state.with(|s| s.loading)>
                    {move || if state.with(|s| s.loading) { "Loading..." } else { "Load summary" }}
                </button>
            </div>
            {move || {
                state.with(|s| s.error.clone())
                    .map(|error| view! { <p class="insight-summary__error">{error}</p> })
            }}
            {move || state.with(|s| s.data.clone()).map(summary_body)}
        </section>
    }
}

fn summary_body(data: InsightsResponse) -> impl IntoView {
    let summary_html = data.summary.as_deref().map(render_markdown_html).unwrap_or_default();
    let store_rows = data
        .stores
        .into_iter()
        .map(|store| {
            view! {
                <tr>
                    <td>{store_label(&store)}</td>
                    <td>{format_availability(store.on_shelf_availability)}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();
    let sku_rows = data
        .skus
        .into_iter()
        .map(|sku| {
            view! {
                <tr>
                    <td>{sku_label(&sku)}</td>
                    <td>{sku.units_sold}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="insight-summary__body">
            <div class="insight-summary__text" inner_html=summary_html></div>
            <table class="insight-summary__table">
                <thead>
                    <tr>
                        <th>"Top stores"</th>
                        <th>"Avg. on-shelf availability"</th>
                    </tr>
                </thead>
                <tbody>{store_rows}</tbody>
            </table>
            <table class="insight-summary__table">
                <thead>
                    <tr>
                        <th>"Lowest-selling SKUs"</th>
                        <th>"Units sold"</th>
                    </tr>
                </thead>
                <tbody>{sku_rows}</tbody>
            </table>
        </div>
    }
}

fn store_label(store: &StoreAvailability) -> String {
    if store.store_name.is_empty() { format!("Store {}", store.store_id) } else { store.store_name.clone() }
}

fn sku_label(sku: &SkuSales) -> String {
    if sku.sku_name.is_empty() { format!("SKU {}", sku.sku_id) } else { sku.sku_name.clone() }
}

fn format_availability(value: f64) -> String {
    format!("{value:.2}")
}
