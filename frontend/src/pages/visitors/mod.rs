pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use components::{
    details::VisitorDetails, edit::EditVisitorForm, register::RegisterVisitorForm,
};
pub use panel::VisitorListPanel;
