//! # Command Registry
//!
//! The ordered list of commands known to the bot. Built-in handlers register
//! at startup, followed by catalog entries from the configuration.

use tokio::sync::RwLock;

use crate::domain::types::CommandDescriptor;

#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: RwLock<Vec<CommandDescriptor>>,
}

impl CommandRegistry {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in commands.
    pub fn with_builtins() -> Self {
        Self {
            commands: RwLock::new(vec![
                CommandDescriptor::new("menu|help", Some("help"))
                    .with_desc("list of commands")
                    .with_react("💬"),
            ]),
        }
    }

    #[cfg(test)]
    pub async fn register(&self, descriptor: CommandDescriptor) {
        self.commands.write().await.push(descriptor);
    }

    pub async fn extend(&self, descriptors: impl IntoIterator<Item = CommandDescriptor>) {
        self.commands.write().await.extend(descriptors);
    }

    /// Copy of the current entries, in registration order.
    pub async fn snapshot(&self) -> Vec<CommandDescriptor> {
        self.commands.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.commands.read().await.len()
    }

    /// Finds the first descriptor with a matching alias (case-insensitive).
    pub async fn find(&self, alias: &str) -> Option<CommandDescriptor> {
        let alias = alias.to_lowercase();
        self.commands
            .read()
            .await
            .iter()
            .find(|d| d.aliases().any(|a| a.to_lowercase() == alias))
            .cloned()
    }
}
