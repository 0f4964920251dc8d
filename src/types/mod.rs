pub mod config;
pub mod methodology;
pub mod report;
