pub mod headers;
pub mod store;
pub mod types;
pub mod write;

pub use store::load_records;
pub use types::MergedRecord;
pub use write::{write_records, OutputFormat};
