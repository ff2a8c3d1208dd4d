//! Tags for the pieces of a formatted accounts file

/// What a fragment of output is, so that a renderer can decide how it
/// should look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Syntax {
    Neutral,
    Indent,
    Newline,
    Site,
    Alias,
    Account,
    Section,
    Field,
    Value,
    Flag,
    Punctuation,
    Error,
    Warning,
    Message,
    Location,
}

/// Something that can turn a tagged fragment into text for output.
pub trait Render {
    fn style(&self, syntax: Syntax, content: &str) -> String;
}

/// Plain text, for pipes and files.
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}
