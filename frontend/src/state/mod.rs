pub mod auth;
pub mod roster;
pub mod session;
pub mod shell;
