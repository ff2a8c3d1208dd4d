//! Code formatter for accounts entries

use crate::formatting::*;
use crate::language::*;

/// Convert entries into tagged fragments laid out in the canonical format:
///
/// ```text
/// site (alias):
/// 	field:	value
///   {account 1}
///     [section]
/// 	field:	value; value
/// 	**flag**
/// ```
///
/// Account and section markers are only written when needed, which is
/// whenever the account or section is not the default one, or when the
/// default one doesn't come first and so would otherwise be misread as
/// belonging to whatever preceded it.
pub fn format_entries(entries: &[Entry]) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    for (i, entry) in entries
        .iter()
        .enumerate()
    {
        if i > 0 {
            output.newline();
        }
        output.format_entry(entry);
    }

    output.fragments
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn newline(&mut self) {
        self.append(Syntax::Newline, "\n");
    }

    fn format_entry(&mut self, entry: &Entry) {
        self.append(Syntax::Site, &entry.site);
        if let Some(alias) = &entry.site_alias {
            self.append(Syntax::Neutral, " ");
            self.append(Syntax::Punctuation, "(");
            self.append(Syntax::Alias, alias);
            self.append(Syntax::Punctuation, ")");
        }
        self.append(Syntax::Punctuation, ":");
        self.newline();

        for (i, account) in entry
            .accounts()
            .into_iter()
            .enumerate()
        {
            if i > 0 || account != entry.default_account {
                self.format_account(account);
            }

            for (j, section) in entry
                .sections(account)
                .into_iter()
                .enumerate()
            {
                if j > 0 || section != entry.default_section {
                    self.format_section(section);
                }

                for (key, value) in entry.items(Some(account), Some(section)) {
                    self.format_field(&key.field, value);
                }
            }
        }
    }

    fn format_account(&mut self, account: u32) {
        self.append(Syntax::Indent, "  ");
        self.append(Syntax::Account, &format!("{{account {}}}", account));
        self.newline();
    }

    fn format_section(&mut self, section: &str) {
        self.append(Syntax::Indent, "    ");
        self.append(Syntax::Punctuation, "[");
        self.append(Syntax::Section, section);
        self.append(Syntax::Punctuation, "]");
        self.newline();
    }

    fn format_field(&mut self, field: &str, value: &Value) {
        self.append(Syntax::Indent, "\t");
        match value {
            Value::Flag => {
                self.append(Syntax::Punctuation, "**");
                self.append(Syntax::Flag, field);
                self.append(Syntax::Punctuation, "**");
            }
            _ => {
                self.append(Syntax::Field, field);
                self.append(Syntax::Punctuation, ":");
                self.append(Syntax::Indent, "\t");
                self.append(Syntax::Value, &value.to_string());
            }
        }
        self.newline();
    }
}
