pub mod messages;
pub mod navigation;
pub mod photo;
pub mod storage;
pub mod time;
