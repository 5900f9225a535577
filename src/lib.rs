pub mod catalog;
pub mod config;
pub mod extract;
pub mod process;
pub mod schema;
