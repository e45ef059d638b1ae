pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use components::schedule::ScheduleVisitForm;
pub use panel::VisitListPanel;
