pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use components::{
    delete::DeleteEmployeeConfirm, details::EmployeeDetails, edit::EditEmployeeForm,
    register::RegisterEmployeeForm,
};
pub use panel::EmployeeListPanel;
