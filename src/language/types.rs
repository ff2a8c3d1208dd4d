//! Types representing the contents of an accounts file

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::parsing::ParsingError;

/// The result of parsing an accounts file: every site entry that was
/// completed, in the order they were opened, and every problem noticed
/// along the way.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub entries: Vec<Entry>,
    pub errors: Vec<ParsingError>,
}

impl Document {
    pub fn is_clean(&self) -> bool {
        self.errors
            .is_empty()
    }
}

/// A datum attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    List(Vec<String>),
    Flag,
}

impl Value {
    /// Values holding a `;` are lists of the parts between them, with
    /// surrounding whitespace removed from each part.
    pub fn parse(raw: &str) -> Value {
        if raw.contains(';') {
            Value::List(
                raw.split(';')
                    .map(|part| {
                        part.trim()
                            .to_string()
                    })
                    .collect(),
            )
        } else {
            Value::Text(raw.to_string())
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{}", text),
            Value::List(parts) => write!(f, "{}", parts.join("; ")),
            Value::Flag => write!(f, "true"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(text) => serializer.serialize_str(text),
            Value::List(parts) => serializer.collect_seq(parts),
            Value::Flag => serializer.serialize_bool(true),
        }
    }
}

/// The complete address of a field within an Entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldKey {
    pub account: u32,
    pub section: String,
    pub field: String,
}

impl FieldKey {
    pub fn new(account: u32, section: &str, field: &str) -> FieldKey {
        FieldKey {
            account,
            section: section.to_string(),
            field: field.to_string(),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.account, self.section, self.field)
    }
}

/// The ways a caller can name a field: either just by its name, meaning
/// the Entry's default account and section, or fully qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Field(&'a str),
    Full(u32, &'a str, &'a str),
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(field: &'a str) -> Self {
        Key::Field(field)
    }
}

impl<'a> From<(u32, &'a str, &'a str)> for Key<'a> {
    fn from((account, section, field): (u32, &'a str, &'a str)) -> Self {
        Key::Full(account, section, field)
    }
}

impl<'a> From<&'a FieldKey> for Key<'a> {
    fn from(key: &'a FieldKey) -> Self {
        Key::Full(key.account, &key.section, &key.field)
    }
}

/// Returned when a write would replace a value already present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey(pub FieldKey);

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate key {}", self.0)
    }
}

/// One site and everything recorded about it. Fields are kept in the
/// order they were written, alongside an index of which sections each
/// account has so that lookups by account don't need to scan every field.
/// Both maps preserve insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub site: String,
    pub site_alias: Option<String>,
    pub site_url: Option<String>,
    pub default_account: u32,
    pub default_section: String,
    fields: IndexMap<FieldKey, Value>,
    accounts: IndexMap<u32, IndexSet<String>>,
}

pub const DEFAULT_ACCOUNT: u32 = 0;
pub const DEFAULT_SECTION: &str = "default";

impl Entry {
    pub fn new(site: &str) -> Entry {
        Entry {
            site: site.to_string(),
            site_alias: None,
            site_url: None,
            default_account: DEFAULT_ACCOUNT,
            default_section: DEFAULT_SECTION.to_string(),
            fields: IndexMap::new(),
            accounts: IndexMap::new(),
        }
    }

    /// Turn whatever form of key the caller has into a complete one. A bare
    /// field name lands in the default account and section.
    pub fn resolve<'a>(&self, key: impl Into<Key<'a>>) -> FieldKey {
        match key.into() {
            Key::Field(field) => FieldKey::new(self.default_account, &self.default_section, field),
            Key::Full(account, section, field) => FieldKey::new(account, section, field),
        }
    }

    /// Store a value. The first write to a given key wins; a later write to
    /// the same key is refused and the existing value is left in place.
    pub fn set<'a>(&mut self, key: impl Into<Key<'a>>, value: Value) -> Result<(), DuplicateKey> {
        let key = self.resolve(key);

        if self
            .fields
            .contains_key(&key)
        {
            return Err(DuplicateKey(key));
        }

        self.accounts
            .entry(key.account)
            .or_default()
            .insert(
                key.section
                    .clone(),
            );
        self.fields
            .insert(key, value);

        Ok(())
    }

    pub fn get<'a>(&self, key: impl Into<Key<'a>>) -> Option<&Value> {
        let key = self.resolve(key);
        self.fields
            .get(&key)
    }

    pub fn contains<'a>(&self, key: impl Into<Key<'a>>) -> bool {
        let key = self.resolve(key);
        self.fields
            .contains_key(&key)
    }

    /// Account numbers in the order they were first written to.
    pub fn accounts(&self) -> Vec<u32> {
        self.accounts
            .keys()
            .copied()
            .collect()
    }

    /// Sections of the given account in the order they were first written
    /// to, or nothing if the account doesn't exist.
    pub fn sections(&self, account: u32) -> Vec<&str> {
        match self
            .accounts
            .get(&account)
        {
            Some(sections) => sections
                .iter()
                .map(String::as_str)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Fields in insertion order, optionally restricted to one account
    /// and/or one section. A section without an account matches that
    /// section name in any account.
    pub fn items<'e>(
        &'e self,
        account: Option<u32>,
        section: Option<&'e str>,
    ) -> impl Iterator<Item = (&'e FieldKey, &'e Value)> + 'e {
        self.fields
            .iter()
            .filter(move |(key, _)| {
                account.map_or(true, |a| key.account == a)
                    && section.map_or(true, |s| key.section == s)
            })
    }

    pub fn len(&self) -> usize {
        self.fields
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields
            .is_empty()
    }
}

// JSON form nests fields under their account and section rather than
// exposing the flat (account, section, field) table.

struct Fields<'e>(Vec<(&'e str, &'e Value)>);

impl Serialize for Fields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(
            self.0
                .len(),
        ))?;
        for (field, value) in &self.0 {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct SectionView<'e> {
    section: &'e str,
    fields: Fields<'e>,
}

#[derive(Serialize)]
struct AccountView<'e> {
    account: u32,
    sections: Vec<SectionView<'e>>,
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let accounts: Vec<AccountView> = self
            .accounts
            .iter()
            .map(|(account, sections)| AccountView {
                account: *account,
                sections: sections
                    .iter()
                    .map(|section| SectionView {
                        section,
                        fields: Fields(
                            self.items(Some(*account), Some(section))
                                .map(|(key, value)| (key.field.as_str(), value))
                                .collect(),
                        ),
                    })
                    .collect(),
            })
            .collect();

        let mut state = serializer.serialize_struct("Entry", 4)?;
        state.serialize_field("site", &self.site)?;
        state.serialize_field("site_alias", &self.site_alias)?;
        state.serialize_field("site_url", &self.site_url)?;
        state.serialize_field("accounts", &accounts)?;
        state.end()
    }
}
