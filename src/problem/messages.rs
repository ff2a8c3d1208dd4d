use accounts::formatting::{Render, Syntax};
use accounts::parsing::Problem;

/// Generate a longer explanation of a problem, with examples of what the
/// parser would have accepted instead.
pub fn generate_error_details(problem: &Problem, renderer: &dyn Render) -> String {
    let field = |name: &str, value: &str| {
        format!(
            "\t{}{}\t{}",
            renderer.style(Syntax::Field, name),
            renderer.style(Syntax::Punctuation, ":"),
            renderer.style(Syntax::Value, value)
        )
    };

    let details = match problem {
        Problem::AliasNotRemoved { alias, .. } => format!(
            r#"
The entry header named an alias, {}, but it could not be separated from the
site name. The entry has been kept under the unaltered name.
            "#,
            renderer.style(Syntax::Alias, alias)
        ),
        Problem::MalformedEntryHeader => format!(
            r#"
Lines that are not indented start a new entry and must end with a colon, as in

{}{}

Since this line does not, it is no longer clear which entry the following
lines belong to. They are skipped until the next well-formed entry header.
            "#,
            renderer.style(Syntax::Site, "example.com"),
            renderer.style(Syntax::Punctuation, ":")
        ),
        Problem::Unrecognized => format!(
            r#"
Lines within an entry are normally fields, with the field name and value
separated by a colon and tabs:

{}
            "#,
            field("username", "bob")
        ),
        Problem::DuplicateKey => r#"
A field with this name has already been given for this account and section.
The first value has been kept.
            "#
        .to_string(),
        Problem::AccountOutOfRange => format!(
            r#"
Account markers take a small whole number, as in

  {}
            "#,
            renderer.style(Syntax::Account, "{account 1}")
        ),
        Problem::NoTopLevelHeadings => format!(
            r#"
Entries are only read from the Accounts part of the Online section. Each of
those headings goes on the line after a rule:

{}
{}
{}
{}
            "#,
            renderer.style(Syntax::Punctuation, &"=".repeat(20)),
            renderer.style(Syntax::Section, ">>Online"),
            renderer.style(Syntax::Punctuation, &"-".repeat(20)),
            renderer.style(Syntax::Section, ">Accounts")
        ),
        Problem::StrictSectionFormat => format!(
            r#"
Sections are named in square brackets:

    {}{}{}
            "#,
            renderer.style(Syntax::Punctuation, "["),
            renderer.style(Syntax::Section, "security questions"),
            renderer.style(Syntax::Punctuation, "]")
        ),
        Problem::StrictShorthand => format!(
            r#"
Write out the fields the shorthand stands for:

{}
{}
{}
            "#,
            field("username", "qwerty0"),
            field("password", "least secure"),
            field("email", "nmapsy")
        ),
        Problem::StrictCreditCard => format!(
            r#"
Notes about stored cards are written as a flag:

	{}{}{}
            "#,
            renderer.style(Syntax::Punctuation, "**"),
            renderer.style(Syntax::Flag, "used credit card"),
            renderer.style(Syntax::Punctuation, "**")
        ),
    };

    let details = details.trim_ascii();

    if problem.is_strict() {
        format!(
            "{}\n\n{}",
            details,
            renderer.style(
                Syntax::Message,
                "Lenient parsing accepts this line; only strict mode reports it."
            )
        )
    } else {
        details.to_string()
    }
}
