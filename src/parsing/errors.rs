use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Things that can be wrong with the content of an accounts file. None of
/// these stop the parser; each is recorded and scanning carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    AliasNotRemoved { alias: String, site: String },
    MalformedEntryHeader,
    Unrecognized,
    DuplicateKey,
    AccountOutOfRange,
    NoTopLevelHeadings,
    StrictSectionFormat,
    StrictShorthand,
    StrictCreditCard,
}

impl Problem {
    pub fn message(&self) -> String {
        match self {
            Problem::AliasNotRemoved { alias, site } => format!(
                "Failed to remove alias \"{}\" from site name \"{}\"",
                alias, site
            ),
            Problem::MalformedEntryHeader => {
                "Line is like an entry header, but malformed".to_string()
            }
            Problem::Unrecognized => "Unrecognized line".to_string(),
            Problem::DuplicateKey => "Duplicate key, section, or account".to_string(),
            Problem::AccountOutOfRange => "Account number out of range".to_string(),
            Problem::NoTopLevelHeadings => "Found no top-level section headings".to_string(),
            Problem::StrictSectionFormat => {
                "Strict mode error: old section line format".to_string()
            }
            Problem::StrictShorthand => "Strict mode error: QLN line".to_string(),
            Problem::StrictCreditCard => {
                "Strict mode error: nonconforming credit card line".to_string()
            }
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(
            self,
            Problem::StrictSectionFormat | Problem::StrictShorthand | Problem::StrictCreditCard
        )
    }
}

/// A problem along with where it was found. The line number is 1-based and
/// the raw text is the line as read, minus its line ending. Both are absent
/// for problems concerning the file as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingError {
    pub problem: Problem,
    pub line: Option<usize>,
    pub raw: Option<String>,
}

impl ParsingError {
    pub fn at(problem: Problem, line: usize, raw: &str) -> ParsingError {
        ParsingError {
            problem,
            line: Some(line),
            raw: Some(raw.to_string()),
        }
    }

    pub fn whole(problem: Problem) -> ParsingError {
        ParsingError {
            problem,
            line: None,
            raw: None,
        }
    }

    pub fn message(&self) -> String {
        self.problem
            .message()
    }
}

impl Serialize for ParsingError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParsingError", 3)?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("raw", &self.raw)?;
        state.end()
    }
}
