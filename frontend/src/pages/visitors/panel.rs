use super::{components::list::VisitorTable, view_model::use_visitor_list_view_model};
use crate::{
    api::{Visitor, VisitorRef},
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    state::shell::{use_shell, ModalView},
};
use leptos::*;

#[component]
pub fn VisitorListPanel() -> impl IntoView {
    let shell = use_shell();
    let vm = use_visitor_list_view_model();
    let loading = vm.visitors_resource.loading();
    let filtered: Signal<Vec<Visitor>> = vm.filtered.into();

    let on_details = Callback::new(move |visitor: Visitor| {
        shell.open_modal(ModalView::VisitorDetails(visitor))
    });
    let on_schedule = Callback::new(move |visitor: Visitor| {
        shell.open_modal(ModalView::ScheduleVisit(VisitorRef::from(&visitor)))
    });
    let on_edit = Callback::new(move |visitor: Visitor| {
        shell.open_modal(ModalView::EditVisitor {
            visitor_id: visitor.id,
        })
    });

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
                <h2 class="text-2xl font-bold text-fg">{"Lista de Visitantes"}</h2>
                <input
                    type="search"
                    class="w-full md:w-80 rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                    placeholder="Pesquisar Visitantes"
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                />
            </div>
            <InlineErrorMessage error=vm.fetch_error />
            <Show when=move || loading.get() && !vm.roster.is_loaded()>
                <LoadingSpinner />
            </Show>
            <Show when=move || vm.roster.is_loaded() && filtered.with(Vec::is_empty)>
                <EmptyState title="Nenhum visitante encontrado." />
            </Show>
            <Show when=move || !filtered.with(Vec::is_empty)>
                <VisitorTable
                    visitors=filtered
                    on_details=on_details
                    on_schedule=on_schedule
                    on_edit=on_edit
                />
            </Show>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::roster::provide_roster;
    use crate::test_support::{helpers::visitor, ssr::render_to_string};

    #[test]
    fn panel_lists_visitors_already_loaded() {
        let html = render_to_string(move || {
            provide_roster::<Visitor>().replace(vec![visitor(1, "Maria", "Oliveira")]);
            view! { <VisitorListPanel /> }
        });
        assert!(html.contains("Lista de Visitantes"));
        assert!(html.contains("Pesquisar Visitantes"));
        assert!(html.contains("Maria Oliveira"));
    }

    #[test]
    fn panel_reports_empty_roster() {
        let html = render_to_string(move || {
            provide_roster::<Visitor>().replace(Vec::new());
            view! { <VisitorListPanel /> }
        });
        assert!(html.contains("Nenhum visitante encontrado."));
    }
}
