// Types representing a parsed accounts file

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
