pub mod schedule;
pub mod table;
