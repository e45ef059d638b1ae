use super::{
    components::table::VisitTable,
    utils::empty_message,
    view_model::use_visit_list_view_model,
};
use crate::components::{empty_state::EmptyState, error::InlineErrorMessage};
use leptos::*;

#[component]
pub fn VisitListPanel() -> impl IntoView {
    let vm = use_visit_list_view_model();
    let loading = vm.rows_resource.loading();
    let filtered: Signal<_> = vm.filtered.into();

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
                <h2 class="text-2xl font-bold text-fg">{"Lista de Visitas"}</h2>
                <input
                    type="search"
                    class="w-full md:w-80 rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                    placeholder="Buscar por nome, setor ou motivo..."
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                />
            </div>
            <InlineErrorMessage error=vm.fetch_error />
            {move || {
                if loading.get() {
                    return view! { <p class="text-sm text-fg-muted">{"Carregando..."}</p> }.into_view();
                }
                if vm.fetch_error.with(Option::is_some) {
                    return ().into_view();
                }
                match empty_message(vm.rows.with(Vec::len), vm.filtered.with(Vec::len)) {
                    Some(message) => view! { <EmptyState title=message /> }.into_view(),
                    None => view! { <VisitTable rows=filtered /> }.into_view(),
                }
            }}
        </section>
    }
}
