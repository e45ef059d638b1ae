mod auth;
pub mod client;
mod employees;
mod visitors;
mod visits;
pub mod types;

pub use client::*;
pub use types::*;
