//! Combined registration/login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the `/` route. A successful submission marks the shared session
//! authenticated and navigates to `/insights`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::INSIGHTS_PATH;
use crate::config::ClientConfig;
use crate::state::credentials::CredentialFormState;
use crate::state::session::SessionState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let form = RwSignal::new(CredentialFormState::default());
    let navigate = use_navigate();

    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    let alive_cleanup = alive.clone();
    on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = None;
        form.update(|f| started = f.begin_submit());
        let Some((mode, request)) = started else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let config = config.get_value();
            let navigate = navigate.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_credentials(&config, mode.endpoint(), &request).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("{} failed: {e}", mode.endpoint());
                }
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                let mut next = session.get_untracked();
                let mut signed_in = false;
                form.update(|f| signed_in = f.finish_submit(&mut next, &request, result));
                if signed_in {
                    session.set(next);
                    navigate(INSIGHTS_PATH, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (mode, request, config, session, &navigate, &alive);
    };

    let title = move || form.with(|f| f.mode.title());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{title}</h1>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || form.with(|f| f.mode.requires_name())>
                        <input
                            class="login-input"
                            name="name"
                            placeholder="Name"
                            required
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        name="email"
                        placeholder="Email"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        name="password"
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || form.with(|f| f.busy)>
                        {title}
                    </button>
                </form>
                <button
                    class="login-toggle"
                    type="button"
                    on:click=move |_| form.update(CredentialFormState::toggle_mode)
                >
                    {move || form.with(|f| f.mode.toggle_label())}
                </button>
                {move || {
                    form.with(|f| f.message.clone())
                        .map(|message| {
                            view! {
                                <p class="login-message" class:login-message--error=message.is_error()>
                                    {message.text().to_owned()}
                                </p>
                            }
                        })
                }}
            </div>
        </div>
    }
}
