//! Export of resolved environment records
//!
//! Build tooling consumes the record in one of a few flat formats; this
//! module renders them and writes them to disk.

mod format;
mod template;
mod writer;

pub use format::{ExportFormat, dotenv_key, render};
pub use template::template;
pub use writer::write_to;
