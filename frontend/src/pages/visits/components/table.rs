use crate::pages::visits::utils::VisitRow;
use leptos::*;

const HEADERS: [&str; 6] = ["Visitante", "Responsável", "Setor", "Motivo", "Data", "Hora"];

#[component]
pub fn VisitTable(#[prop(into)] rows: Signal<Vec<VisitRow>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        {HEADERS
                            .iter()
                            .map(|header| {
                                view! {
                                    <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                        {*header}
                                    </th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="bg-surface-elevated divide-y divide-border">
                    <For
                        each=move || rows.get()
                        key=|row| row.visit.id
                        children=move |row: VisitRow| {
                            view! {
                                <tr class="hover:bg-surface-muted">
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{row.visitor_name}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{row.visit.responsible_name}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{row.visit.sector}</td>
                                    <td class="px-6 py-4 text-sm text-fg">{row.visit.visit_reason}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{row.when.date}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{row.when.time}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::visits::utils::build_rows;
    use crate::test_support::{helpers::visit, ssr::render_to_string};
    use std::collections::HashMap;

    #[test]
    fn renders_one_row_per_visit_with_local_date() {
        let names = HashMap::from([(7, "Maria Oliveira".to_string())]);
        let rows = build_rows(vec![visit(1, 7, "2025-03-01T17:05:00Z")], &names);
        assert_eq!(rows[0].when.date, "01/03/2025");

        let html = render_to_string(move || {
            view! { <VisitTable rows=Signal::derive(move || rows.clone()) /> }
        });
        assert!(html.contains("Responsável"));
        assert!(html.contains("Maria Oliveira"));
        // SSR escapes '/' inside text nodes.
        assert!(html.contains("01&#x2F;03&#x2F;2025"));
        assert!(html.contains("14:05"));
    }
}
