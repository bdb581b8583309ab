//! Query page: the gated `/insights` route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the query box and summary panel only for an authenticated
//! session; otherwise shows a placeholder while the guard redirects to `/`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::insight_summary::InsightSummary;
use crate::components::query_box::QueryBox;
use crate::state::session::SessionState;
use crate::util::auth::{install_unauth_redirect, should_redirect_unauth};

#[component]
pub fn InsightsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Show
            when=move || session.with(|s| !should_redirect_unauth(s))
            fallback=|| {
                view! {
                    <div class="insights-page">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
            }
        >
            <div class="insights-page">
                <header class="insights-page__header">
                    <h2>"Explore Your Insights"</h2>
                    <span class="insights-page__user">
                        {move || session.with(|s| s.user.clone().unwrap_or_default())}
                    </span>
                </header>
                <QueryBox/>
                <InsightSummary/>
            </div>
        </Show>
    }
}
