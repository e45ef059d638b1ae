//! Authenticated shell: the header, one main panel and one modal slot.
//!
//! Every panel and modal body is chosen by the two matches below, so the
//! header and the list pages only ever talk to [`ShellController`].

use crate::{
    api::{Employee, Visitor},
    components::{
        layout::{Layout, ShellArea},
        modal::ModalFrame,
    },
    pages::{
        employees::{
            DeleteEmployeeConfirm, EditEmployeeForm, EmployeeDetails, EmployeeListPanel,
            RegisterEmployeeForm,
        },
        home::HomePanel,
        visitors::{EditVisitorForm, RegisterVisitorForm, VisitorDetails, VisitorListPanel},
        visits::{view_model::provide_visits_reload, ScheduleVisitForm, VisitListPanel},
    },
    state::{
        roster::provide_roster,
        shell::{provide_shell, use_shell, MainPanel, ModalTicket, ModalView, ShellState},
    },
};
use leptos::*;

fn render_panel(panel: MainPanel) -> View {
    match panel {
        MainPanel::Home => view! { <HomePanel /> }.into_view(),
        MainPanel::VisitList => view! { <VisitListPanel /> }.into_view(),
        MainPanel::VisitorList => view! { <VisitorListPanel /> }.into_view(),
        MainPanel::EmployeeList => view! { <EmployeeListPanel /> }.into_view(),
    }
}

fn render_modal(modal: ModalView) -> View {
    match modal {
        ModalView::RegisterVisitor => view! { <RegisterVisitorForm /> }.into_view(),
        ModalView::EditVisitor { visitor_id } => {
            view! { <EditVisitorForm visitor_id=visitor_id /> }.into_view()
        }
        ModalView::VisitorDetails(visitor) => view! { <VisitorDetails visitor=visitor /> }.into_view(),
        ModalView::ScheduleVisit(visitor) => {
            view! { <ScheduleVisitForm visitor=visitor /> }.into_view()
        }
        ModalView::RegisterEmployee => view! { <RegisterEmployeeForm /> }.into_view(),
        ModalView::EditEmployee(employee) => {
            view! { <EditEmployeeForm employee=employee /> }.into_view()
        }
        ModalView::DeleteEmployee(employee) => {
            view! { <DeleteEmployeeConfirm employee=employee /> }.into_view()
        }
        ModalView::EmployeeDetails(employee) => {
            view! { <EmployeeDetails employee=employee /> }.into_view()
        }
    }
}

#[component]
fn MainSlot() -> impl IntoView {
    let shell = use_shell();
    let panel = create_memo(move |_| shell.active_panel());

    view! { <div class="space-y-6">{move || render_panel(panel.get())}</div> }
}

/// Re-mounts the modal body whenever a new modal opens, even one equal to the last.
#[component]
fn ModalSlot() -> impl IntoView {
    let shell = use_shell();
    let state = shell.state();
    let current = create_memo(move |_| {
        state.with(|s| s.modal().cloned().map(|modal| (s.ticket(), modal)))
    });
    let on_close = Callback::new(move |_: ()| shell.close_modal());

    move || {
        current.get().map(|(_ticket, modal): (ModalTicket, ModalView)| {
            let title = modal.title();
            view! {
                <ModalFrame title=title on_close=on_close>
                    {render_modal(modal)}
                </ModalFrame>
            }
        })
    }
}

#[component]
pub fn ShellPage(
    #[prop(optional)] area: ShellArea,
    #[prop(optional)] initial_panel: MainPanel,
) -> impl IntoView {
    provide_shell(ShellState::with_panel(initial_panel));
    provide_roster::<Visitor>();
    provide_roster::<Employee>();
    provide_visits_reload();
    log::debug!("Shell mounted for {:?} on {:?}", area, initial_panel);

    view! {
        <Layout area=area>
            <MainSlot />
            <ModalSlot />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::{provide_session, Role};
    use crate::test_support::{helpers::signed_in_store, ssr::render_to_string};

    #[test]
    fn reception_shell_starts_on_home() {
        let html = render_to_string(move || {
            provide_session(signed_in_store(Some(Role::User)));
            view! { <ShellPage /> }
        });
        assert!(html.contains("Bem-vindo, porteiro!"));
        assert!(html.contains("Cadastrar Visitante"));
        assert!(html.contains("Lista de Visitas"));
        assert!(!html.contains("aria-modal"));
    }

    #[test]
    fn employee_area_starts_on_the_employee_list() {
        let html = render_to_string(move || {
            provide_session(signed_in_store(Some(Role::Admin)));
            view! { <ShellPage area=ShellArea::Employees initial_panel=MainPanel::EmployeeList /> }
        });
        assert!(html.contains("Pesquisar Funcionários"));
        assert!(html.contains("Cadastrar Funcionário"));
        assert!(html.contains("Voltar"));
    }

    #[test]
    fn modal_slot_renders_the_open_modal_over_the_panel() {
        let html = render_to_string(move || {
            provide_session(signed_in_store(Some(Role::User)));
            let shell = provide_shell(ShellState::with_panel(MainPanel::Home));
            shell.open_modal(ModalView::RegisterVisitor);
            provide_roster::<Visitor>();
            provide_visits_reload();
            view! {
                <MainSlot />
                <ModalSlot />
            }
        });
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("Cadastrar Visitante"));
        assert!(html.contains("Bem-vindo, porteiro!"));
    }

    #[test]
    fn every_main_panel_renders() {
        for panel in MainPanel::ALL {
            let html = render_to_string(move || {
                provide_session(signed_in_store(Some(Role::Admin)));
                provide_shell(ShellState::with_panel(panel));
                provide_roster::<Visitor>();
                provide_roster::<Employee>();
                provide_visits_reload();
                view! { <MainSlot /> }
            });
            assert!(!html.is_empty(), "{:?} rendered nothing", panel);
        }
    }
}
