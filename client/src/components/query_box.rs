//! Free-text question box with generated SQL and result display.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends each question to `POST /query` and commits the answer through
//! `QueryState`'s sequence check, so only the newest question's answer is
//! shown. Answers arriving after unmount are dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::query::{QueryOutcome, QueryState};
use crate::state::session::SessionState;

#[component]
pub fn QueryBox() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let state = RwSignal::new(QueryState::default());

    let alive = StoredValue::new(Arc::new(AtomicBool::new(true)));
    let alive_cleanup = alive.get_value();
    on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

    let do_send = move || {
        let mut started = None;
        state.update(|s| started = s.begin());
        let Some((seq, request)) = started else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            let alive = alive.get_value();
            let token = session.with_untracked(|s| s.access_token.clone());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::ask_query(&config, token.as_deref(), &request).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("query #{seq} failed: {e}");
                }
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                let outcome = QueryOutcome::from_result(result);
                let mut committed = false;
                state.update(|s| committed = s.commit(seq, outcome));
                if !committed {
                    leptos::logging::log!("discarded stale answer for query #{seq}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (seq, request, session, config, alive);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="query-box">
            <h3 class="query-box__title">"Ask a Question"</h3>
            <input
                class="query-box__input"
                type="text"
                placeholder="e.g. Show top 5 stores with highest availability"
                prop:value=move || state.with(|s| s.query.clone())
                on:input=move |ev| state.update(|s| s.query = event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                class="btn btn--primary query-box__ask"
                on:click=move |_| do_send()
                disabled=move || !state.with(QueryState::can_submit)
            >
                {move || if state.with(|s| s.pending) { "Loading..." } else { "Ask" }}
            </button>

            {move || {
                state.with(|s| s.sql.clone())
                    .map(|sql| {
                        view! {
                            <div class="query-box__sql">
                                <strong>"SQL Generated:"</strong>
                                <pre>{sql}</pre>
                            </div>
                        }
                    })
            }}

            {move || {
                state.with(|s| s.response.clone())
                    .map(|response| {
                        let is_error = response.is_error();
                        let text = response.render();
                        view! {
                            <div class="query-box__response" class:query-box__response--error=is_error>
                                <strong>"Response:"</strong>
                                <pre>{text}</pre>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
