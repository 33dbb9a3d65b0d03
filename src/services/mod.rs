pub use errors::{ExportError, ExportResult};

pub mod errors;
pub mod export;
