pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod record;
pub mod summary;
