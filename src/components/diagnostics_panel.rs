//! Connectivity panel with per-collection row counts.

use leptos::prelude::*;

use crate::controller::diagnostics::DiagnosticsReport;
use crate::state::diagnostics::DiagnosticsState;

/// Row counts for the four core tables, fetched once at startup. Failed
/// collections show as zero with the error listed underneath.
#[component]
pub fn DiagnosticsPanel() -> impl IntoView {
    let diagnostics = expect_context::<RwSignal<DiagnosticsState>>();

    view! {
        <section class="px-6 py-16 max-w-6xl mx-auto">
            <h3 class="text-xl font-semibold text-[#AD1457] mb-4 text-center">
                "Status da conexão"
            </h3>
            {move || match diagnostics.get().report {
                None => {
                    view! { <p class="text-center text-gray-500">"Verificando conexão..."</p> }
                        .into_any()
                }
                Some(report) => view! { <ReportGrid report=report/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ReportGrid(report: DiagnosticsReport) -> impl IntoView {
    let DiagnosticsReport { counts, errors } = report;

    view! {
        <div class="grid gap-4 md:grid-cols-4">
            {counts
                .into_iter()
                .map(|(collection, count)| {
                    view! {
                        <div class="rounded-2xl p-4 bg-white shadow-md text-center">
                            <p class="text-2xl font-bold text-[#6A1B9A]">{count}</p>
                            <p class="text-sm text-gray-500">{collection_label(&collection)}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
        {(!errors.is_empty())
            .then(|| {
                view! {
                    <ul class="mt-4 text-sm text-center text-red-600">
                        {errors
                            .into_iter()
                            .map(|e| {
                                view! {
                                    <li>
                                        {format!(
                                            "{}: {}",
                                            collection_label(&e.collection),
                                            e.message,
                                        )}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
            })}
    }
}

fn collection_label(collection: &str) -> &'static str {
    match collection {
        "clients" => "Clientes",
        "staff" => "Profissionais",
        "services" => "Serviços",
        "appointments" => "Agendamentos",
        _ => "Tabela",
    }
}
