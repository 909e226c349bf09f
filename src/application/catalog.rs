//! # Command Catalog
//!
//! Groups registry entries into categories for the help menu.
//! The index is rebuilt on every render so it always mirrors the registry.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::types::CommandDescriptor;

pub const FALLBACK_CATEGORY: &str = "other";

static DISPLAY_FILTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\-+]").expect("display filter pattern"));

/// Ordered mapping from category to canonical command names.
/// Categories and commands keep first-seen registry order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CategoryIndex {
    entries: Vec<(String, Vec<String>)>,
}

impl CategoryIndex {
    pub fn build(registry: &[CommandDescriptor]) -> Self {
        let mut index = Self::default();
        for descriptor in registry {
            let Some(name) = descriptor.canonical_name() else {
                continue;
            };
            let category = descriptor
                .kind
                .as_deref()
                .filter(|k| !k.is_empty())
                .unwrap_or(FALLBACK_CATEGORY);
            index.push(category, name);
        }
        index
    }

    fn push(&mut self, category: &str, name: &str) {
        match self.entries.iter_mut().find(|(c, _)| c == category) {
            Some((_, names)) => names.push(name.to_string()),
            None => self
                .entries
                .push((category.to_string(), vec![name.to_string()])),
        }
    }

    /// Case-insensitive category lookup, returning the stored key and its commands.
    pub fn resolve(&self, requested: &str) -> Option<(&str, &[String])> {
        let requested = requested.trim().to_lowercase();
        if requested.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(c, _)| c.to_lowercase() == requested)
            .map(|(c, names)| (c.as_str(), names.as_slice()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(c, names)| (c.as_str(), names.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn command_count(&self) -> usize {
        self.entries.iter().map(|(_, names)| names.len()).sum()
    }
}

/// Strips everything outside `[a-zA-Z0-9-+]` from a command name before display.
pub fn sanitize_command_name(name: &str) -> String {
    DISPLAY_FILTER.replace_all(name, "").into_owned()
}
