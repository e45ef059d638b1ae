use crate::{
    state::{
        auth::use_logout,
        session::{use_session, Role},
        shell::{use_shell, MainPanel, ModalView},
    },
    utils::navigation,
};
use leptos::*;

/// Which navigation bar the shell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellArea {
    #[default]
    Reception,
    Employees,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    Show(MainPanel),
    Open(ModalView),
    Link(&'static str),
    Logout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub action: NavAction,
}

impl NavItem {
    fn new(label: &'static str, action: NavAction) -> Self {
        Self { label, action }
    }
}

pub fn nav_items(area: ShellArea, role: Option<Role>) -> Vec<NavItem> {
    let mut items = match area {
        ShellArea::Reception => vec![
            NavItem::new("Home", NavAction::Show(MainPanel::Home)),
            NavItem::new("Cadastrar Visitante", NavAction::Open(ModalView::RegisterVisitor)),
            NavItem::new("Lista de Visitas", NavAction::Show(MainPanel::VisitList)),
            NavItem::new("Lista de Visitantes", NavAction::Show(MainPanel::VisitorList)),
        ],
        ShellArea::Employees => vec![
            NavItem::new("Lista de Funcionários", NavAction::Show(MainPanel::EmployeeList)),
            NavItem::new("Cadastrar Funcionário", NavAction::Open(ModalView::RegisterEmployee)),
            NavItem::new("Voltar", NavAction::Link("/header")),
        ],
    };
    if area == ShellArea::Reception && role == Some(Role::Admin) {
        items.push(NavItem::new("Área do Gestor", NavAction::Link("/funcionarios")));
    }
    items.push(NavItem::new("Sair", NavAction::Logout));
    items
}

#[component]
pub fn Header(#[prop(optional)] area: ShellArea) -> impl IntoView {
    let shell = use_shell();
    let logout = use_logout();
    let role = use_session().role();
    let (menu_open, set_menu_open) = create_signal(false);

    let run = move |action: NavAction| {
        set_menu_open.set(false);
        match action {
            NavAction::Show(panel) => shell.show_in_main(panel),
            NavAction::Open(view) => shell.open_modal(view),
            NavAction::Link(path) => navigation::navigate_to(path),
            NavAction::Logout => logout.call(()),
        }
    };

    let render_items = move |block: bool| {
        nav_items(area, role)
            .into_iter()
            .map(|item| {
                let action = item.action.clone();
                let is_logout = action == NavAction::Logout;
                let panel = match &action {
                    NavAction::Show(panel) => Some(*panel),
                    _ => None,
                };
                let class = move || {
                    let active = panel.is_some() && panel == Some(shell.active_panel());
                    format!(
                        "{} text-left px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover {}",
                        if block { "block w-full" } else { "" },
                        if active {
                            "text-fg bg-surface-muted"
                        } else if is_logout {
                            "text-status-error-text"
                        } else {
                            "text-fg-muted hover:text-fg"
                        }
                    )
                };
                view! {
                    <button type="button" class=class on:click=move |_| run(action.clone())>
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Bem-vindo"</h1>
                    <nav class="hidden lg:flex space-x-2">{render_items(false)}</nav>
                    <button
                        type="button"
                        class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Fechar menu" } else { "Abrir menu" }}
                        </span>
                        <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                        </svg>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <nav id="mobile-nav" class="lg:hidden border-t border-border px-4 py-3 space-y-1">
                        {render_items(true)}
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(#[prop(optional)] area: ShellArea, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header area=area/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" aria-label="Carregando...">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
