//! # Domain Types
//!
//! Common data structures used across the menu pipeline.

use serde::{Deserialize, Serialize};

/// A registered command as seen by the catalog.
///
/// `cmd` is a pipe-delimited alias list (`"menu|help"`); the first alias is canonical.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommandDescriptor {
    #[serde(default)]
    pub cmd: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub react: Option<String>,
}

impl CommandDescriptor {
    pub fn new(cmd: &str, kind: Option<&str>) -> Self {
        Self {
            cmd: cmd.to_string(),
            kind: kind.map(str::to_string),
            ..Default::default()
        }
    }

    pub fn with_desc(mut self, desc: &str) -> Self {
        self.desc = Some(desc.to_string());
        self
    }

    pub fn with_react(mut self, react: &str) -> Self {
        self.react = Some(react.to_string());
        self
    }

    /// First alias, trimmed. `None` when `cmd` is empty.
    pub fn canonical_name(&self) -> Option<&str> {
        if self.cmd.is_empty() {
            return None;
        }
        self.cmd.split('|').next().map(str::trim)
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.cmd.split('|').map(str::trim).filter(|a| !a.is_empty())
    }
}

/// Bot-level values the menu header reads on every render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuConfig {
    pub bot_name: String,
    pub owner_name: String,
    pub menu_image: Option<String>,
}

/// The invoking message, one per command invocation.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Trailing text after the command word.
    pub text: Option<String>,
    /// Display name of the sender.
    pub push_name: String,
    /// Platform label reported by the chat client.
    pub platform: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name_is_first_alias_trimmed() {
        let d = CommandDescriptor::new(" menu | help", Some("help"));
        assert_eq!(d.canonical_name(), Some("menu"));
        assert_eq!(d.aliases().collect::<Vec<_>>(), vec!["menu", "help"]);
    }

    #[test]
    fn test_empty_cmd_has_no_canonical_name() {
        let d = CommandDescriptor::new("", None);
        assert_eq!(d.canonical_name(), None);
    }

    #[test]
    fn test_descriptor_deserializes_type_field() {
        let d: CommandDescriptor =
            serde_yaml::from_str("cmd: \"ping|p\"\ntype: misc\ndesc: latency").unwrap();
        assert_eq!(d.kind.as_deref(), Some("misc"));
        assert_eq!(d.desc.as_deref(), Some("latency"));
        assert_eq!(d.react, None);
    }
}
