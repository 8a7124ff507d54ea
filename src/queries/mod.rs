//! Answer lookup for balance categories
//!
//! The responder never owns its content directly. It asks a [`ResponseSource`],
//! so the built-in table can be swapped for a file or a key-value store
//! without touching intent dispatch.

use std::collections::HashMap;
use std::path::Path;

use crate::errors::ContentError;

const SALES_TAX: &str =
    "Your payment deadline ( https://www.abc.ca/pay-when.html ) depends on your sales tax filing period.";
const PAYROLL: &str = "There are various due dates for paying (remitting) your payroll source deductions. Your due date ( https://www.abc.ca/remit-due-dates.html ) depends on your remitter type.";
const TRUST: &str = "Your balance is due ( https://www.abc.ca/trust-balance.html ) no later than X days after the trust's tax year-end.";
const BUSINESS: &str = "Generally, your balance is due ( https://www.abc.ca/business-balance.html )  no later than X months after the end of the tax year.";
const INDIVIDUAL: &str = "Your balance is due no later than December 31.\nFor more information, see your taxes.( https://www.abc.ca/your-taxes.html )";

/// Built-in categories. Synonyms are separate keys sharing one answer.
const BUILTIN_RESPONSES: &[(&str, &str)] = &[
    ("sales tax", SALES_TAX),
    ("sales", SALES_TAX),
    ("source deductions for payroll", PAYROLL),
    ("payroll", PAYROLL),
    ("trusts", TRUST),
    ("incorporated business", BUSINESS),
    ("individual", INDIVIDUAL),
    ("business", BUSINESS),
    ("self-employed", INDIVIDUAL),
    ("trust", TRUST),
];

/// Result of looking up a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a str),
    NotFound(String),
}

impl<'a> Lookup<'a> {
    pub fn found(&self) -> Option<&'a str> {
        match self {
            Lookup::Found(text) => Some(*text),
            Lookup::NotFound(_) => None,
        }
    }
}

/// Source of canned answers keyed by normalized (lower-case) category
pub trait ResponseSource: Send + Sync {
    /// Look up an already normalized category
    fn lookup(&self, category: &str) -> Lookup<'_>;

    /// All categories this source can answer, sorted
    fn categories(&self) -> Vec<&str>;
}

/// Immutable category → answer table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    entries: HashMap<String, String>,
}

impl ResponseTable {
    /// The table shipped with the bot
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_RESPONSES
                .iter()
                .map(|(category, text)| (category.to_string(), text.to_string()))
                .collect(),
        }
    }

    /// Build a table from arbitrary entries, folding keys to lower case
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, ContentError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = HashMap::new();
        for (category, text) in entries {
            let category = normalize_category(category.as_ref());
            if table.insert(category.clone(), text.into()).is_some() {
                return Err(ContentError::DuplicateCategory(category));
            }
        }

        if table.is_empty() {
            return Err(ContentError::Empty);
        }

        Ok(Self { entries: table })
    }

    /// Parse a YAML mapping of category to answer
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ContentError> {
        let entries: HashMap<String, String> = serde_yaml::from_str(yaml)?;
        Self::from_entries(entries)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ContentError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ResponseSource for ResponseTable {
    fn lookup(&self, category: &str) -> Lookup<'_> {
        match self.entries.get(category) {
            Some(text) => Lookup::Found(text),
            None => Lookup::NotFound(category.to_string()),
        }
    }

    fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        categories.sort_unstable();
        categories
    }
}

/// Case-fold a slot value into a table key
pub fn normalize_category(value: &str) -> String {
    value.to_lowercase()
}
