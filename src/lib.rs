pub mod formatting;
pub mod language;
pub mod parsing;
pub mod regex;
