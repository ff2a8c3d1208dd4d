// Program wide presentation of problems found in accounts files

mod format;
mod messages;

// Re-export all public symbols
pub use format::*;
