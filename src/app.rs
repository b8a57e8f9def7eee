//! Root application component: context wiring, session bootstrap, teardown.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::backend::SupabaseClient;
use crate::components::auth_form::AuthForm;
use crate::components::diagnostics_panel::DiagnosticsPanel;
use crate::components::feature_cards::FeatureCards;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::config::BackendConfig;
use crate::controller::diagnostics::DiagnosticsReport;
use crate::controller::session::SessionLoad;
use crate::state::auth::AuthState;
use crate::state::diagnostics::DiagnosticsState;

/// Root application component.
///
/// Builds the backend client explicitly and hands it to children via
/// context; nothing talks to the hosted service through ambient globals.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let diagnostics = RwSignal::new(DiagnosticsState::default());
    provide_context(auth);
    provide_context(diagnostics);

    let config = BackendConfig::from_build_env();
    let client = match &config {
        Ok(config) => SupabaseClient::new(config.clone()),
        // Placeholder so child components still find a client in context;
        // its requests all fail and the panels show why below.
        Err(_) => SupabaseClient::new(BackendConfig::new("", "")),
    };
    provide_context(client.clone());

    match config {
        Ok(_) => start_backend_tasks(&client, auth, diagnostics),
        Err(err) => {
            auth.update(|a| a.apply_load(SessionLoad::Failed(err.to_string())));
            diagnostics.update(|d| {
                d.report = Some(DiagnosticsReport::all_failed(&err.to_string()));
            });
        }
    }

    view! {
        <Title text="Agenda Studio"/>
        <div class="min-h-screen bg-[#FFFDFE] text-gray-700">
            <Header/>
            <Hero/>
            <FeatureCards/>
            <AuthForm/>
            <DiagnosticsPanel/>
            <Footer/>
        </div>
    }
}

/// Kick off the one-shot session load, the change subscription, and the
/// diagnostics fetch; register teardown so late responses are dropped.
/// Browser-only.
fn start_backend_tasks(
    client: &SupabaseClient,
    auth: RwSignal<AuthState>,
    diagnostics: RwSignal<DiagnosticsState>,
) {
    #[cfg(feature = "csr")]
    {
        use crate::controller::lifecycle::LifecycleToken;
        use crate::controller::session;

        let token = LifecycleToken::new();

        let subscription = session::bind_session_changes(client, &token, move |new_session| {
            auth.update(|a| a.session_changed(new_session));
        });

        {
            let client = client.clone();
            let token = token.clone();
            leptos::task::spawn_local(async move {
                session::load_initial_session(&client, &token, |load| {
                    auth.update(|a| a.apply_load(load));
                })
                .await;
            });
        }

        {
            let client = client.clone();
            let token = token.clone();
            leptos::task::spawn_local(async move {
                let report = crate::controller::diagnostics::fetch_diagnostics(&client).await;
                if token.is_active() {
                    diagnostics.update(|d| d.report = Some(report));
                }
            });
        }

        on_cleanup(move || {
            token.retire();
            subscription.dispose();
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client, auth, diagnostics);
    }
}
