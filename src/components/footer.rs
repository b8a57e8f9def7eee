//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-16 py-6 text-center text-sm text-gray-500">
            {format!("© {} Agenda Studio · Segunda a Sábado · 9h às 19h", current_year())}
        </footer>
    }
}

/// Current year from the browser clock.
fn current_year() -> u32 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "csr"))]
    {
        // The page only ever renders in csr builds.
        2026
    }
}
