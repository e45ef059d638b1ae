use crate::api::Visitor;
use leptos::*;

#[component]
pub fn VisitorTable(
    #[prop(into)] visitors: Signal<Vec<Visitor>>,
    on_details: Callback<Visitor>,
    on_schedule: Callback<Visitor>,
    on_edit: Callback<Visitor>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Nome"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"RG"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Telefone"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{"Ações"}</th>
                    </tr>
                </thead>
                <tbody class="bg-surface-elevated divide-y divide-border">
                    <For
                        each=move || visitors.get()
                        key=|visitor| (visitor.id, visitor.full_name(), visitor.rg.clone(), visitor.phone.clone())
                        children=move |visitor: Visitor| {
                            let details = visitor.clone();
                            let schedule = visitor.clone();
                            let edit = visitor.clone();
                            view! {
                                <tr class="hover:bg-surface-muted">
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{visitor.full_name()}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{visitor.rg}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{visitor.phone}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm space-x-2">
                                        <button
                                            type="button"
                                            class="text-action-primary-bg hover:underline"
                                            on:click=move |_| on_details.call(details.clone())
                                        >
                                            {"Ver detalhes"}
                                        </button>
                                        <button
                                            type="button"
                                            class="text-status-success-text hover:underline"
                                            on:click=move |_| on_schedule.call(schedule.clone())
                                        >
                                            {"Criar Visita"}
                                        </button>
                                        <button
                                            type="button"
                                            class="text-fg-muted hover:underline"
                                            on:click=move |_| on_edit.call(edit.clone())
                                        >
                                            {"Editar"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
