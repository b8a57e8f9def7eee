//! Hero section with the booking call-to-action.

use leptos::prelude::*;

/// Headline and call-to-action; the button scrolls down to the auth form.
#[component]
pub fn Hero() -> impl IntoView {
    let scroll_to_form = move |_| {
        #[cfg(feature = "csr")]
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("entrar"))
        {
            el.scroll_into_view();
        }
    };

    view! {
        <section class="px-6 py-16 text-center">
            <h2 class="text-4xl font-bold text-[#6A1B9A] mb-4">"Agende seu momento de beleza"</h2>
            <p class="text-lg text-gray-600 mb-8">
                "Escolha o serviço, o profissional e o melhor horário para você."
            </p>
            <button
                class="px-8 py-4 rounded-full bg-[#D1C4E9] text-[#4A148C] font-semibold text-lg hover:opacity-90 transition"
                on:click=scroll_to_form
            >
                "Agendar agora"
            </button>
        </section>
    }
}
