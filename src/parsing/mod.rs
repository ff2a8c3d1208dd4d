//! parser for accounts files

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{Document, LoadingError};

pub mod classify;
mod errors;
pub mod parser;
mod scope;

pub use errors::{ParsingError, Problem};
pub use parser::{parse_reader, parse_str, Mode, Parser, Unimplemented};

/// Read a file and return an owned String. A filename of "-" means
/// standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a Document. This always succeeds; whatever was wrong
/// with the content is listed in the Document's errors.
pub fn parse(content: &str) -> Document {
    let document = parser::parse_str(content);

    debug!(
        "Found {} entr{}",
        document
            .entries
            .len(),
        if document
            .entries
            .len()
            == 1
        {
            "y"
        } else {
            "ies"
        }
    );

    if !document.is_clean() {
        debug!("errors: {}", document.errors.len());
    }

    document
}
