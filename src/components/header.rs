//! Page header with brand and the login/logout control.

use leptos::prelude::*;

use crate::backend::SupabaseClient;
use crate::controller::form::submit_logout;
use crate::state::auth::AuthState;

/// Sticky brand bar. Shows the signed-in email and a logout button when
/// authenticated, otherwise a link down to the auth form.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<SupabaseClient>();

    let on_logout = move |_| {
        if auth.get_untracked().is_loading() {
            return;
        }
        auth.update(AuthState::begin_submit);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_logout(&client).await;
            auth.update(|a| a.apply_outcome(outcome));
        });
    };

    view! {
        <header class="flex items-center justify-between px-6 py-4 bg-[#FCE4EC] shadow-sm">
            <h1 class="text-2xl font-semibold text-[#AD1457]">"Agenda Studio"</h1>
            {move || {
                let state = auth.get();
                let disabled = state.is_loading();
                if let Some(session) = state.session {
                    view! {
                        <div class="flex items-center gap-4">
                            <span class="text-sm text-[#6A1B9A]">{session.email}</span>
                            <button
                                class="px-4 py-2 rounded-full bg-[#F8BBD0] text-[#6A1B9A] font-medium hover:opacity-90 transition disabled:opacity-50"
                                disabled=disabled
                                on:click=on_logout.clone()
                            >
                                "Sair"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <a
                            href="#entrar"
                            class="px-4 py-2 rounded-full bg-[#F8BBD0] text-[#6A1B9A] font-medium hover:opacity-90 transition"
                        >
                            "Entrar"
                        </a>
                    }
                        .into_any()
                }
            }}
        </header>
    }
}
