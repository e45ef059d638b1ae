pub mod details;
pub mod edit;
pub mod fields;
pub mod list;
pub mod register;
