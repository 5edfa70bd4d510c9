//! Command implementations.

pub mod add;
pub mod analyze;
pub mod dashboard;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod record;
pub mod show;
pub mod tables;
