//! Login/signup form wired to the form controller.

use leptos::prelude::*;

use crate::backend::SupabaseClient;
use crate::controller::form::{AuthOutcome, submit_login, submit_signup};
use crate::state::auth::{AuthMode, AuthState};
use crate::state::form::FormState;

const INPUT_CLASS: &str = "rounded-full px-4 py-3 border border-[#F8BBD0] focus:outline-none focus:border-[#AD1457] bg-[#FFFDFE]";

/// Auth section: the credential form while signed out, a short blurb while
/// signed in. Feedback (error or notice) renders in both states.
#[component]
pub fn AuthForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section id="entrar" class="px-6 py-16 max-w-md mx-auto">
            {move || {
                if auth.get().is_authenticated() {
                    view! { <SignedInBlurb/> }.into_any()
                } else {
                    view! { <CredentialForm/> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn SignedInBlurb() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="rounded-2xl p-8 bg-white shadow-md text-center">
            <Feedback/>
            <p class="text-gray-600">
                "Conectado como "
                <span class="font-medium text-[#AD1457]">
                    {move || auth.get().session.map(|s| s.email).unwrap_or_default()}
                </span>
            </p>
        </div>
    }
}

#[component]
fn CredentialForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<SupabaseClient>();

    // Owned by the form: survives mode switches, discarded on success.
    let form = RwSignal::new(FormState::default());

    let submitting = move || auth.get().is_loading();
    let signup_mode = move || auth.get().mode == AuthMode::Signup;
    let switch_to = move |mode: AuthMode| auth.update(|a| a.set_mode(mode));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().is_loading() {
            return;
        }
        let input = form.get_untracked();
        let mode = auth.get_untracked().mode;
        auth.update(AuthState::begin_submit);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let outcome = match mode {
                AuthMode::Login => submit_login(&client, &input.email, &input.password).await,
                AuthMode::Signup => {
                    submit_signup(
                        &client,
                        &input.email,
                        &input.password,
                        &input.confirm_password,
                        &page_origin(),
                    )
                    .await
                }
            };
            let succeeded = !matches!(outcome, AuthOutcome::Failed { .. });
            auth.update(|a| a.apply_outcome(outcome));
            if succeeded {
                form.update(FormState::clear);
            }
        });
    };

    view! {
        <div class="rounded-2xl p-8 bg-white shadow-md">
            <h3 class="text-xl font-semibold text-[#AD1457] mb-6 text-center">
                {move || if signup_mode() { "Crie sua conta" } else { "Acesse sua conta" }}
            </h3>

            <Feedback/>

            <form on:submit=on_submit class="flex flex-col gap-4">
                <input
                    type="email"
                    placeholder="E-mail"
                    class=INPUT_CLASS
                    prop:value=move || form.get().email
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Senha"
                    class=INPUT_CLASS
                    prop:value=move || form.get().password
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <Show when=signup_mode>
                    <input
                        type="password"
                        placeholder="Confirme a senha"
                        class=INPUT_CLASS
                        prop:value=move || form.get().confirm_password
                        on:input=move |ev| {
                            form.update(|f| f.confirm_password = event_target_value(&ev));
                        }
                    />
                </Show>
                <button
                    type="submit"
                    class="px-8 py-3 rounded-full bg-[#D1C4E9] text-[#4A148C] font-semibold hover:opacity-90 transition disabled:opacity-50"
                    disabled=submitting
                >
                    {move || {
                        if submitting() {
                            "Enviando..."
                        } else if signup_mode() {
                            "Criar conta"
                        } else {
                            "Entrar"
                        }
                    }}
                </button>
            </form>

            <p class="mt-6 text-sm text-center text-gray-500">
                {move || {
                    if signup_mode() {
                        view! {
                            "Já tem conta? "
                            <button
                                type="button"
                                class="text-[#AD1457] font-medium hover:underline"
                                on:click=move |_| switch_to(AuthMode::Login)
                            >
                                "Entrar"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            "Ainda não tem conta? "
                            <button
                                type="button"
                                class="text-[#AD1457] font-medium hover:underline"
                                on:click=move |_| switch_to(AuthMode::Signup)
                            >
                                "Criar conta"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </p>
        </div>
    }
}

/// Inline error (red) or notice (green) above the form fields.
#[component]
fn Feedback() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show when=move || auth.get().error.is_some()>
            <p class="mb-4 text-sm text-center text-red-600">
                {move || auth.get().error.unwrap_or_default()}
            </p>
        </Show>
        <Show when=move || auth.get().notice.is_some()>
            <p class="mb-4 text-sm text-center text-green-600">
                {move || auth.get().notice.unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Origin of the current page, used as the signup confirmation redirect.
fn page_origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
