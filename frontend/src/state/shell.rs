//! Main-panel and modal slots of the authenticated shell.
//!
//! [`ShellState`] is plain data with the slot operations; [`ShellController`]
//! wraps it in a signal and is what views receive through context.

use crate::api::{Employee, Visitor, VisitorRef};
use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MainPanel {
    #[default]
    Home,
    VisitList,
    VisitorList,
    EmployeeList,
}

impl MainPanel {
    pub const ALL: [MainPanel; 4] = [
        MainPanel::Home,
        MainPanel::VisitList,
        MainPanel::VisitorList,
        MainPanel::EmployeeList,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainPanel::Home => "Home",
            MainPanel::VisitList => "Lista de Visitas",
            MainPanel::VisitorList => "Lista de Visitantes",
            MainPanel::EmployeeList => "Lista de Funcionários",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalView {
    RegisterVisitor,
    EditVisitor { visitor_id: i64 },
    VisitorDetails(Visitor),
    ScheduleVisit(VisitorRef),
    RegisterEmployee,
    EditEmployee(Employee),
    DeleteEmployee(Employee),
    EmployeeDetails(Employee),
}

impl ModalView {
    pub fn title(&self) -> &'static str {
        match self {
            ModalView::RegisterVisitor => "Cadastrar Visitante",
            ModalView::EditVisitor { .. } => "Editar Visitante",
            ModalView::VisitorDetails(_) => "Detalhes do Visitante",
            ModalView::ScheduleVisit(_) => "Criar Visita",
            ModalView::RegisterEmployee => "Cadastrar Funcionário",
            ModalView::EditEmployee(_) => "Editar Funcionário",
            ModalView::DeleteEmployee(_) => "Excluir Funcionário",
            ModalView::EmployeeDetails(_) => "Detalhes do Funcionário",
        }
    }
}

/// Result of a finished modal flow that may lead straight into another one.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalOutcome {
    VisitorRegistered(VisitorRef),
    VisitScheduled,
    Dismissed,
}

impl ModalOutcome {
    pub fn follow_up(self) -> Option<ModalView> {
        match self {
            ModalOutcome::VisitorRegistered(visitor) => Some(ModalView::ScheduleVisit(visitor)),
            ModalOutcome::VisitScheduled | ModalOutcome::Dismissed => None,
        }
    }
}

/// Identifies one opening of the modal; stale once the modal closes or changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellState {
    active_panel: MainPanel,
    modal: Option<ModalView>,
    modal_generation: u64,
}

impl ShellState {
    pub fn with_panel(panel: MainPanel) -> Self {
        Self {
            active_panel: panel,
            ..Self::default()
        }
    }

    pub fn active_panel(&self) -> MainPanel {
        self.active_panel
    }

    pub fn modal_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn modal(&self) -> Option<&ModalView> {
        self.modal.as_ref()
    }

    pub fn ticket(&self) -> ModalTicket {
        ModalTicket(self.modal_generation)
    }

    pub fn is_current(&self, ticket: ModalTicket) -> bool {
        self.modal.is_some() && ticket.0 == self.modal_generation
    }

    pub fn show_in_main(&mut self, panel: MainPanel) {
        self.active_panel = panel;
    }

    pub fn open_modal(&mut self, view: ModalView) -> ModalTicket {
        self.modal_generation = self.modal_generation.wrapping_add(1);
        self.modal = Some(view);
        self.ticket()
    }

    pub fn close_modal(&mut self) {
        if self.modal.take().is_some() {
            self.modal_generation = self.modal_generation.wrapping_add(1);
        }
    }

    /// Closes the current modal and opens whatever `next` derives from `outcome`.
    pub fn chain_modal<T>(
        &mut self,
        outcome: T,
        next: impl FnOnce(T) -> Option<ModalView>,
    ) -> Option<ModalTicket> {
        self.close_modal();
        next(outcome).map(|view| self.open_modal(view))
    }

    pub fn close_modal_if(&mut self, ticket: ModalTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.close_modal();
        true
    }

    pub fn chain_modal_if(&mut self, ticket: ModalTicket, outcome: ModalOutcome) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.chain_modal(outcome, ModalOutcome::follow_up);
        true
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ShellController {
    state: RwSignal<ShellState>,
}

impl ShellController {
    pub fn new(initial: ShellState) -> Self {
        Self {
            state: create_rw_signal(initial),
        }
    }

    pub fn state(&self) -> ReadSignal<ShellState> {
        self.state.read_only()
    }

    pub fn active_panel(&self) -> MainPanel {
        self.state.with(ShellState::active_panel)
    }

    pub fn modal_open(&self) -> bool {
        self.state.with(ShellState::modal_open)
    }

    pub fn modal(&self) -> Option<ModalView> {
        self.state.with(|s| s.modal().cloned())
    }

    /// Ticket for the modal currently on screen, read without tracking.
    pub fn ticket(&self) -> ModalTicket {
        self.state.with_untracked(ShellState::ticket)
    }

    pub fn show_in_main(&self, panel: MainPanel) {
        self.state.update(|s| s.show_in_main(panel));
    }

    pub fn open_modal(&self, view: ModalView) {
        self.state.update(|s| {
            s.open_modal(view);
        });
    }

    pub fn close_modal(&self) {
        self.state.update(ShellState::close_modal);
    }

    pub fn close_modal_if(&self, ticket: ModalTicket) -> bool {
        let mut applied = false;
        self.state.update(|s| applied = s.close_modal_if(ticket));
        if !applied {
            log::debug!("Dropping stale modal close for {:?}", ticket);
        }
        applied
    }

    pub fn chain_modal_if(&self, ticket: ModalTicket, outcome: ModalOutcome) -> bool {
        let mut applied = false;
        self.state.update(|s| applied = s.chain_modal_if(ticket, outcome));
        if !applied {
            log::debug!("Dropping stale modal hand-off for {:?}", ticket);
        }
        applied
    }
}

pub fn provide_shell(initial: ShellState) -> ShellController {
    let controller = ShellController::new(initial);
    provide_context(controller);
    controller
}

pub fn use_shell() -> ShellController {
    use_context::<ShellController>().unwrap_or_else(|| provide_shell(ShellState::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor() -> VisitorRef {
        VisitorRef {
            id: 55,
            name: "Maria".into(),
            sur_name: "Oliveira".into(),
        }
    }

    #[test]
    fn defaults_to_home_with_modal_closed() {
        let state = ShellState::default();
        assert_eq!(state.active_panel(), MainPanel::Home);
        assert!(!state.modal_open());
        assert!(state.modal().is_none());
    }

    #[test]
    fn open_then_close_restores_closed_modal_and_keeps_panel() {
        let mut state = ShellState::with_panel(MainPanel::VisitorList);
        state.open_modal(ModalView::RegisterVisitor);
        assert!(state.modal_open());
        state.close_modal();
        assert!(!state.modal_open());
        assert!(state.modal().is_none());
        assert_eq!(state.active_panel(), MainPanel::VisitorList);
    }

    #[test]
    fn show_in_main_never_touches_the_modal() {
        for panel in MainPanel::ALL {
            let mut state = ShellState::default();
            state.open_modal(ModalView::RegisterEmployee);
            let before = state.modal().cloned();
            let ticket = state.ticket();
            state.show_in_main(panel);
            assert_eq!(state.active_panel(), panel);
            assert_eq!(state.modal().cloned(), before);
            assert!(state.is_current(ticket));

            let mut closed = ShellState::default();
            closed.show_in_main(panel);
            assert!(!closed.modal_open());
        }
    }

    #[test]
    fn registering_a_visitor_chains_into_a_seeded_visit_form() {
        let mut state = ShellState::with_panel(MainPanel::VisitList);
        let ticket = state.open_modal(ModalView::RegisterVisitor);

        assert!(state.chain_modal_if(ticket, ModalOutcome::VisitorRegistered(visitor())));

        assert_eq!(state.modal(), Some(&ModalView::ScheduleVisit(visitor())));
        match state.modal() {
            Some(ModalView::ScheduleVisit(seed)) => assert_eq!(seed.id, 55),
            other => panic!("unexpected modal {:?}", other),
        }
        assert_eq!(state.active_panel(), MainPanel::VisitList);
    }

    #[test]
    fn chaining_without_follow_up_just_closes() {
        let mut state = ShellState::default();
        state.open_modal(ModalView::ScheduleVisit(visitor()));
        let ticket = state.chain_modal(ModalOutcome::VisitScheduled, ModalOutcome::follow_up);
        assert!(ticket.is_none());
        assert!(!state.modal_open());
    }

    #[test]
    fn stale_tickets_are_ignored() {
        let mut state = ShellState::default();
        let first = state.open_modal(ModalView::RegisterVisitor);
        state.close_modal();
        assert!(!state.close_modal_if(first));
        assert!(!state.chain_modal_if(first, ModalOutcome::VisitorRegistered(visitor())));
        assert!(!state.modal_open());

        let second = state.open_modal(ModalView::RegisterEmployee);
        let third = state.open_modal(ModalView::RegisterVisitor);
        assert_ne!(second, third);
        assert!(!state.close_modal_if(second));
        assert_eq!(state.modal(), Some(&ModalView::RegisterVisitor));
        assert!(state.close_modal_if(third));
        assert!(!state.modal_open());
    }

    #[test]
    fn closing_an_already_closed_modal_keeps_tickets_stable() {
        let mut state = ShellState::default();
        let before = state.ticket();
        state.close_modal();
        assert_eq!(state.ticket(), before);
    }
}
