use super::messages::generate_error_details;
use accounts::formatting::{Render, Syntax};
use accounts::language::LoadingError;
use accounts::parsing::ParsingError;

/// How loudly a problem is being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Plain,
}

/// Format a parsing error as a message line followed by the line number and
/// raw text of the offending line, if it has one.
pub fn concise_parsing_error(
    error: &ParsingError,
    severity: Severity,
    renderer: &dyn Render,
) -> String {
    let prefix = match severity {
        Severity::Error => format!("{}: ", renderer.style(Syntax::Error, "Error")),
        Severity::Warning => format!("{}: ", renderer.style(Syntax::Warning, "Warning")),
        Severity::Plain => String::new(),
    };

    let message = renderer.style(Syntax::Message, &error.message());

    match (error.line, &error.raw) {
        (Some(line), Some(raw)) => format!(
            "{}{}:\n{}:{}\n",
            prefix,
            message,
            renderer.style(Syntax::Location, &line.to_string()),
            raw
        ),
        _ => format!("{}{}.\n", prefix, message),
    }
}

/// Format a parsing error with full details, showing the offending line in
/// context and an explanation of what was expected.
pub fn full_parsing_error(
    error: &ParsingError,
    severity: Severity,
    filename: &str,
    renderer: &dyn Render,
) -> String {
    let label = match severity {
        Severity::Error => renderer.style(Syntax::Error, "error"),
        Severity::Warning => renderer.style(Syntax::Warning, "warning"),
        Severity::Plain => String::new(),
    };
    let label = if label.is_empty() {
        label
    } else {
        format!("{}: ", label)
    };

    let problem = renderer.style(Syntax::Message, &error.message());
    let details = generate_error_details(&error.problem, renderer);

    match (error.line, &error.raw) {
        (Some(line), Some(raw)) => {
            let width = 3.max(
                line.to_string()
                    .len(),
            );
            let bar = renderer.style(Syntax::Location, "|");

            format!(
                "{}{}:{} {}\n\n{:width$} {}\n{} {} {}\n{:width$} {}\n\n{}\n",
                label,
                filename,
                line,
                problem,
                ' ',
                bar,
                renderer.style(Syntax::Location, &format!("{:>width$}", line)),
                bar,
                raw,
                ' ',
                bar,
                details
            )
        }
        _ => format!("{}{}: {}\n\n{}\n", label, filename, problem, details),
    }
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError, renderer: &dyn Render) -> String {
    format!(
        "{}: {}: {}",
        renderer.style(Syntax::Error, "error"),
        error
            .filename
            .display(),
        renderer.style(Syntax::Message, &error.to_string())
    )
}
