//! Renderers for colourizing accounts files

use owo_colors::OwoColorize;

use crate::formatting::formatter::format_entries;
use crate::formatting::*;
use crate::language::Entry;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Indent => content.to_string(),
            Syntax::Newline => "\n".to_string(),
            Syntax::Site => content // #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::Alias => content // #729fcf (light blue)
                .color(owo_colors::Rgb(0x72, 0x9f, 0xcf))
                .to_string(),
            Syntax::Account => content // #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .bold()
                .to_string(),
            Syntax::Section => content // #8f5902 (brown) bold
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .bold()
                .to_string(),
            Syntax::Field => content
                .bright_white()
                .bold()
                .to_string(),
            Syntax::Value => content // #4e9a06 (green)
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .to_string(),
            Syntax::Flag => content // #f57900 (orange) bold
                .color(owo_colors::Rgb(0xf5, 0x79, 0x00))
                .bold()
                .to_string(),
            Syntax::Punctuation => content // #999999 (grey)
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
            Syntax::Error => content
                .bright_red()
                .to_string(),
            Syntax::Warning => content
                .bright_yellow()
                .to_string(),
            Syntax::Message => content
                .bold()
                .to_string(),
            Syntax::Location => content
                .bright_blue()
                .to_string(),
        }
    }
}

/// Write entries out in the canonical layout. The entries are first broken
/// into tagged fragments, then each fragment is passed through the renderer.
pub fn render(renderer: &dyn Render, entries: &[Entry]) -> String {
    let fragments = format_entries(entries);

    render_to_string(renderer, fragments)
}

fn render_to_string(renderer: &dyn Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        output.push_str(&renderer.style(syntax, &content));
    }

    output
}
