//! Static marketing cards.

use leptos::prelude::*;

/// The three fixed feature cards under the hero.
#[component]
pub fn FeatureCards() -> impl IntoView {
    view! {
        <section class="px-6 grid gap-6 md:grid-cols-3 max-w-6xl mx-auto">
            <FeatureCard
                title="Serviços"
                description="Cabelo, unhas, estética e muito mais"
            />
            <FeatureCard
                title="Profissionais"
                description="Escolha quem vai cuidar de você"
            />
            <FeatureCard
                title="Horários"
                description="De segunda a sábado, das 9h às 19h"
            />
        </section>
    }
}

#[component]
fn FeatureCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="rounded-2xl p-6 bg-white shadow-md hover:shadow-lg transition">
            <h3 class="text-xl font-semibold text-[#AD1457] mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}
