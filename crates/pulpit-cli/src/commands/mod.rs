pub mod config;
pub mod declarations;
pub mod sermons;
