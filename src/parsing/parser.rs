use std::fmt;
use std::io::{self, BufRead};

use tracing::{debug, trace};

use crate::language::{Document, DuplicateKey, Entry, Value, DEFAULT_ACCOUNT, DEFAULT_SECTION};
use crate::parsing::classify::{self, Heading, LineKind, SiteHeader};
use crate::parsing::errors::{ParsingError, Problem};
use crate::parsing::scope::Scope;

// Fields written for a QLN line.
const SHORTHAND: [(&str, &str); 3] = [
    ("username", "qwerty0"),
    ("password", "least secure"),
    ("email", "nmapsy"),
];

const CREDIT_CARD: &str = "used credit card";

/// How forgiving to be of older or looser line formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Lenient,
    Strict,
}

/// Returned when asking for something that doesn't work yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unimplemented(pub &'static str);

impl fmt::Display for Unimplemented {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not implemented", self.0)
    }
}

impl std::error::Error for Unimplemented {}

/// Parse the whole of an accounts file already in memory.
pub fn parse_str(content: &str) -> Document {
    let mut parser = Parser::with_mode(Mode::Lenient);

    for line in content.lines() {
        parser.feed(line);
    }

    parser.finish()
}

/// Parse an accounts file line by line from a reader. Only a failure to
/// read is an error here; problems with the content end up in the
/// returned Document.
pub fn parse_reader<R: BufRead>(reader: R) -> io::Result<Document> {
    let mut parser = Parser::with_mode(Mode::Lenient);

    for line in reader.lines() {
        parser.feed(&line?);
    }

    Ok(parser.finish())
}

/// The line-at-a-time parsing engine. Feed it every line of the file in
/// order, then call finish() to get the Document.
#[derive(Debug)]
pub struct Parser {
    mode: Mode,
    line_num: usize,
    last_line: Option<String>,
    scope: Scope,
    current: Option<Entry>,
    account: u32,
    section: String,
    entries: Vec<Entry>,
    errors: Vec<ParsingError>,
}

impl Parser {
    pub fn new(mode: Mode) -> Result<Parser, Unimplemented> {
        match mode {
            Mode::Lenient => Ok(Parser::with_mode(mode)),
            Mode::Strict => Err(Unimplemented("strict mode")),
        }
    }

    fn with_mode(mode: Mode) -> Parser {
        Parser {
            mode,
            line_num: 0,
            last_line: None,
            scope: Scope::new(),
            current: None,
            account: DEFAULT_ACCOUNT,
            section: DEFAULT_SECTION.to_string(),
            entries: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Process one line. Any line ending still attached is ignored.
    pub fn feed(&mut self, raw: &str) {
        self.line_num += 1;

        let line = raw.trim_end_matches(&['\r', '\n'][..]);

        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with('#') {
            return;
        }

        if let Some(heading) = classify::heading(line, self.last_line.as_deref()) {
            match heading {
                Heading::TopLevel(name) => {
                    debug!(line = self.line_num, name, "top-level section");
                    self.scope
                        .enter_top_level(name);
                }
                Heading::SuperSection(name) => {
                    debug!(line = self.line_num, name, "super-section");
                    self.scope
                        .enter_super_section(name);
                }
            }
            self.remember(line);
            return;
        }

        if self
            .scope
            .is_accounts()
        {
            self.read_content(line);
        }

        self.remember(line);
    }

    /// Wrap up. The entry in progress, if there is one, is kept.
    pub fn finish(mut self) -> Document {
        if let Some(entry) = self
            .current
            .take()
        {
            self.complete(entry);
        }

        if !self
            .scope
            .seen_top_level()
        {
            self.errors
                .push(ParsingError::whole(Problem::NoTopLevelHeadings));
        }

        debug!(
            entries = self
                .entries
                .len(),
            errors = self
                .errors
                .len(),
            "finished parsing"
        );

        Document {
            entries: self.entries,
            errors: self.errors,
        }
    }

    fn remember(&mut self, line: &str) {
        match &mut self.last_line {
            Some(last) => {
                last.clear();
                last.push_str(line);
            }
            None => self.last_line = Some(line.to_string()),
        }
    }

    fn read_content(&mut self, line: &str) {
        let kind = classify::classify(line, self.last_line.as_deref());
        trace!(line = self.line_num, ?kind);

        match kind {
            LineKind::Site(header) => self.begin_entry(header, line),
            _ if self
                .current
                .is_none() =>
            {
                // lost until the next clean entry header
            }
            LineKind::Account(number) => match number.parse::<u32>() {
                Ok(account) => {
                    self.account = account;
                    self.section = DEFAULT_SECTION.to_string();
                }
                Err(_) => self.report(Problem::AccountOutOfRange, line),
            },
            LineKind::Section { name, legacy } => {
                if legacy && self.mode == Mode::Strict {
                    self.report(Problem::StrictSectionFormat, line);
                } else {
                    self.section = name.to_string();
                }
            }
            LineKind::KeyValue { field, value } => self.store(field, Value::parse(value), line),
            LineKind::Flag(name) => self.store(name, Value::Flag, line),
            LineKind::Divider => {}
            LineKind::SiteUrl { alias, site } => {
                if let Some(entry) = &mut self.current {
                    entry.site_alias = Some(alias);
                    entry.site = site.to_string();
                }
            }
            LineKind::Shorthand => {
                if self.mode == Mode::Strict {
                    self.report(Problem::StrictShorthand, line);
                } else {
                    for (field, value) in SHORTHAND {
                        self.store(field, Value::Text(value.to_string()), line);
                    }
                }
            }
            LineKind::CreditCard => {
                if self.mode == Mode::Strict {
                    self.report(Problem::StrictCreditCard, line);
                } else {
                    self.store(CREDIT_CARD, Value::Flag, line);
                }
            }
            LineKind::MalformedHeader => {
                if let Some(entry) = self
                    .current
                    .take()
                {
                    debug!(line = self.line_num, site = %entry.site, "abandoning entry");
                }
                self.report(Problem::MalformedEntryHeader, line);
            }
            LineKind::Unrecognized => self.report(Problem::Unrecognized, line),
        }
    }

    fn begin_entry(&mut self, header: SiteHeader, line: &str) {
        if let Some(entry) = self
            .current
            .take()
        {
            self.complete(entry);
        }

        let SiteHeader {
            site,
            alias,
            stripped,
        } = header;

        if !stripped {
            if let Some(alias) = &alias {
                self.report(
                    Problem::AliasNotRemoved {
                        alias: alias.clone(),
                        site: site.clone(),
                    },
                    line,
                );
            }
        }

        let mut entry = Entry::new(&site);
        entry.site_alias = alias;

        self.current = Some(entry);
        self.account = DEFAULT_ACCOUNT;
        self.section = DEFAULT_SECTION.to_string();
    }

    fn complete(&mut self, entry: Entry) {
        debug!(site = %entry.site, fields = entry.len(), "completed entry");
        self.entries
            .push(entry);
    }

    fn store(&mut self, field: &str, value: Value, line: &str) {
        let Some(entry) = &mut self.current else {
            return;
        };

        if let Err(DuplicateKey(key)) = entry.set((self.account, self.section.as_str(), field), value)
        {
            debug!(line = self.line_num, %key, "duplicate key");
            self.report(Problem::DuplicateKey, line);
        }
    }

    fn report(&mut self, problem: Problem, line: &str) {
        self.errors
            .push(ParsingError::at(problem, self.line_num, line));
    }
}
