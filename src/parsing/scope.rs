pub(crate) const ONLINE: &str = "online";
pub(crate) const ACCOUNTS: &str = "accounts";

/// Where in the document we are, according to the most recent top-level
/// and super-section headings. Names are held lowercased. A new top-level
/// heading does not clear the super-section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Scope {
    top_level: Option<String>,
    super_section: Option<String>,
}

impl Scope {
    pub(crate) fn new() -> Scope {
        Scope::default()
    }

    pub(crate) fn enter_top_level(&mut self, name: &str) {
        self.top_level = Some(name.to_lowercase());
    }

    pub(crate) fn enter_super_section(&mut self, name: &str) {
        self.super_section = Some(name.to_lowercase());
    }

    pub(crate) fn top_level(&self) -> Option<&str> {
        self.top_level
            .as_deref()
    }

    pub(crate) fn super_section(&self) -> Option<&str> {
        self.super_section
            .as_deref()
    }

    /// Only the Accounts part of the Online section holds site entries.
    pub(crate) fn is_accounts(&self) -> bool {
        self.top_level() == Some(ONLINE) && self.super_section() == Some(ACCOUNTS)
    }

    pub(crate) fn seen_top_level(&self) -> bool {
        self.top_level
            .is_some()
    }
}
