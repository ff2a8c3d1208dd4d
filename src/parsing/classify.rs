//! Recognizing what sort of line we are looking at

use crate::regex;

const DOUBLE_RULE: &str = "====================";
const SINGLE_RULE: &str = "--------------------";

/// A named region of the file. Headings only count when the line before
/// them is a rule of at least twenty `=` (for the top level) or `-` (for a
/// super-section).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading<'i> {
    TopLevel(&'i str),
    SuperSection(&'i str),
}

/// The site named by an entry header, with its alias split off if one was
/// given in parentheses. `stripped` is false when an alias was found but
/// could not be removed from the site name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteHeader {
    pub site: String,
    pub alias: Option<String>,
    pub stripped: bool,
}

/// Every kind of content line, listed in the order they are tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'i> {
    Site(SiteHeader),
    Account(&'i str),
    Section { name: &'i str, legacy: bool },
    KeyValue { field: &'i str, value: &'i str },
    Flag(&'i str),
    Divider,
    SiteUrl { alias: String, site: &'i str },
    Shorthand,
    CreditCard,
    MalformedHeader,
    Unrecognized,
}

pub fn heading<'i>(line: &'i str, previous: Option<&str>) -> Option<Heading<'i>> {
    let previous = previous?;

    if previous.contains(DOUBLE_RULE) {
        let re = regex!(r"^>>(\S.*)\s*$");
        if let Some(cap) = re.captures(line) {
            let name = cap
                .get(1)?
                .as_str()
                .trim();
            return Some(Heading::TopLevel(name));
        }
    }

    if previous.contains(SINGLE_RULE) {
        let re = regex!(r"^>(\S.*)\s*$");
        if let Some(cap) = re.captures(line) {
            let name = cap
                .get(1)?
                .as_str()
                .trim();
            return Some(Heading::SuperSection(name));
        }
    }

    None
}

/// Entry headers are flush left and end in a colon. When the name looks
/// like a URL, a trailing " (Alias)" is taken off and kept separately.
pub fn site_header(line: &str) -> Option<SiteHeader> {
    let cap = regex!(r"^(\S.*\S):\s*$").captures(line)?;

    let mut header = SiteHeader {
        site: cap
            .get(1)?
            .as_str()
            .to_string(),
        alias: None,
        stripped: true,
    };

    if let Some(url) = regex!(r"^((?:.+://)?[^.]+\.[^.]+.+):\s*$").captures(line) {
        header.site = url
            .get(1)?
            .as_str()
            .to_string();

        if let Some(cap) = regex!(r" \(([^)]+)\):\s*$").captures(line) {
            let alias = cap
                .get(1)?
                .as_str();
            let before = header
                .site
                .clone();

            header.site = before.replace(&format!(" ({})", alias), "");
            header.stripped = header.site != before;
            header.alias = Some(alias.to_string());
        }
    }

    Some(header)
}

pub fn classify<'i>(line: &'i str, previous: Option<&str>) -> LineKind<'i> {
    if let Some(header) = site_header(line) {
        return LineKind::Site(header);
    }

    if let Some(cap) = regex!(r"^\s+\{account\s*(\d+)\}\s*$").captures(line) {
        if let Some(number) = cap.get(1) {
            return LineKind::Account(number.as_str());
        }
    }

    if let Some(name) = capture(regex!(r"^\s+\[([\w#. -]+)\]\s*$"), line) {
        return LineKind::Section {
            name,
            legacy: false,
        };
    }

    if let Some(name) = capture(regex!(r"^ {3,5}(\S.*\S):\s*$"), line) {
        return LineKind::Section { name, legacy: true };
    }

    if let Some((field, value)) = key_value(line) {
        return LineKind::KeyValue { field, value };
    }

    if let Some(name) = capture(regex!(r"^\s+\*\*([^*]+)\*\*\s*$"), line) {
        return LineKind::Flag(name);
    }

    if is_divider(line) {
        return LineKind::Divider;
    }

    special(line, previous)
}

/// The tab separated form is the canonical one; when it matches it wins
/// over the looser reading of the same line.
fn key_value(line: &str) -> Option<(&str, &str)> {
    let loose = regex!(r"^\s+(\S(?:.*\S)?):\s*(\S.*)$").captures(line)?;

    let cap = match regex!(r"^\t(\S(?:.*\S)?):\t+(\S(?:.*\S)?)\s*$").captures(line) {
        Some(canonical) => canonical,
        None => loose,
    };

    let field = cap
        .get(1)?
        .as_str();
    let value = cap
        .get(2)?
        .as_str();

    Some((field, value))
}

fn is_divider(line: &str) -> bool {
    line.contains(DOUBLE_RULE) || line.contains(SINGLE_RULE)
}

// Lines that fit none of the proper formats but which are common enough in
// older parts of the file to be worth recognizing.
fn special<'i>(line: &'i str, previous: Option<&str>) -> LineKind<'i> {
    let url = capture(regex!(r"^((?:.+://)?[^.]+\.[^.]+.+)\s*$"), line);
    let named = previous.and_then(|previous| capture(regex!(r"^(\S.*\S):\s*$"), previous));

    if let (Some(site), Some(alias)) = (url, named) {
        // name on one line, URL on the next
        return LineKind::SiteUrl {
            alias: alias.to_string(),
            site: site.trim(),
        };
    }

    if regex!(r"^\s+(QLN)(?:\s+\S.*$|\s*$)").is_match(line) {
        return LineKind::Shorthand;
    }

    if regex!(r"\s*\*.*credit card.*\*\s*").is_match(line) {
        return LineKind::CreditCard;
    }

    if regex!(r"^\S").is_match(line) {
        return LineKind::MalformedHeader;
    }

    LineKind::Unrecognized
}

fn capture<'i>(re: &::regex::Regex, line: &'i str) -> Option<&'i str> {
    re.captures(line)?
        .get(1)
        .map(|m| m.as_str())
}
