use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    components::{guard::RequireSession, layout::ShellArea},
    pages::{LoginPage, NotFoundPage, ShellPage},
    state::{auth::AuthProvider, session::Role, shell::MainPanel},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/header", "/home", "/funcionarios"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/header", "/home", "/funcionarios"];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/funcionarios"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="Gatehouse"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LoginPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/header" view=ReceptionRoute/>
                    <Route path="/home" view=HomeRoute/>
                    <Route path="/funcionarios" view=EmployeesRoute/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ReceptionRoute() -> impl IntoView {
    view! {
        <RequireSession target="/header">
            <ShellPage area=ShellArea::Reception />
        </RequireSession>
    }
}

#[component]
fn HomeRoute() -> impl IntoView {
    view! {
        <RequireSession target="/home">
            <ShellPage area=ShellArea::Reception />
        </RequireSession>
    }
}

#[component]
fn EmployeesRoute() -> impl IntoView {
    view! {
        <RequireSession target="/funcionarios" allowed_roles=vec![Role::Admin]>
            <ShellPage area=ShellArea::Employees initial_panel=MainPanel::EmployeeList />
        </RequireSession>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::{provide_session, SessionStore};
    use crate::test_support::{helpers::signed_in_store, ssr::render_to_string};

    #[test]
    fn reception_route_requires_a_session() {
        let html = render_to_string(move || {
            provide_session(SessionStore::in_memory());
            view! { <ReceptionRoute /> }
        });
        assert!(!html.contains("Lista de Visitantes"));

        let html = render_to_string(move || {
            provide_session(signed_in_store(Some(Role::User)));
            view! { <ReceptionRoute /> }
        });
        assert!(html.contains("Lista de Visitantes"));
    }

    #[test]
    fn employee_route_is_admin_only() {
        let html = render_to_string(move || {
            provide_session(signed_in_store(Some(Role::User)));
            view! { <EmployeesRoute /> }
        });
        assert!(!html.contains("Pesquisar Funcionários"));

        let html = render_to_string(move || {
            provide_session(signed_in_store(Some(Role::Admin)));
            view! { <EmployeesRoute /> }
        });
        assert!(html.contains("Pesquisar Funcionários"));
    }
}
