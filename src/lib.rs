pub mod api;
pub mod config;
pub mod errors;
pub mod paths;
pub mod report;
pub mod structure;
