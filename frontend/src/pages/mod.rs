pub mod employees;
pub mod home;
pub mod login;
pub mod not_found;
pub mod shell;
pub mod visitors;
pub mod visits;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use shell::ShellPage;
