//! UI Components
//!
//! Demo views around the drop target.

mod event_log;
mod file_table;

pub use event_log::EventLog;
pub use file_table::FileTable;
