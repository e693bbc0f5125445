pub mod add;
pub mod analytics;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod list;
pub mod log;
pub mod query;
