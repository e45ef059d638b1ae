use super::{repository::EmployeesRepository, utils::filter_employees};
use crate::{
    api::{ApiError, Employee},
    state::{
        auth::use_api_client,
        roster::{use_roster, Roster},
    },
};
use leptos::*;
use std::rc::Rc;

pub fn use_employees_repository() -> EmployeesRepository {
    EmployeesRepository::new_with_client(Rc::new(use_api_client()))
}

#[derive(Clone, Copy)]
pub struct EmployeeListViewModel {
    pub search: RwSignal<String>,
    pub roster: Roster<Employee>,
    pub employees_resource: Resource<u32, Result<Vec<Employee>, ApiError>>,
    pub filtered: Memo<Vec<Employee>>,
    pub fetch_error: Signal<Option<ApiError>>,
}

pub fn use_employee_list_view_model() -> EmployeeListViewModel {
    let repository = use_employees_repository();
    let roster = use_roster::<Employee>();
    let search = create_rw_signal(String::new());

    let employees_resource = create_resource(
        move || roster.revision(),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_employees().await }
        },
    );

    // Effects
    create_effect(move |_| match employees_resource.get() {
        Some(Ok(list)) => roster.replace(list),
        Some(Err(err)) => log::error!("Failed to load employees: {}", err),
        None => {}
    });

    let fetch_error =
        Signal::derive(move || employees_resource.get().and_then(|result| result.err()));
    let items = roster.items();
    let filtered = create_memo(move |_| {
        search.with(|query| items.with(|list| filter_employees(list, query)))
    });

    EmployeeListViewModel {
        search,
        roster,
        employees_resource,
        filtered,
        fetch_error,
    }
}
