//! # Menu Renderer
//!
//! Composes the categorized help menu from a registry snapshot.
//!
//! Two modes:
//! - **Category**: the request text names a known category (case-insensitive).
//! - **Overview**: runtime header followed by one block per category.
//!
//! In both modes the visible header is followed by a run of invisible marks so
//! clients fold the body behind "read more".

use anyhow::Result;
use futures::future::try_join_all;
use std::sync::Arc;

use crate::application::catalog::{CategoryIndex, sanitize_command_name};
use crate::application::format::{format_bytes, format_duration};
use crate::domain::traits::{RuntimeStats, TextStyler};
use crate::domain::types::{CommandDescriptor, MenuConfig, RequestContext};
use crate::strings::menu as layout;

/// Style applied to category labels.
pub const LABEL_STYLE: &str = "monospace";
/// Style applied to command lists and bodies.
pub const BODY_STYLE: &str = "sansItalic";

pub struct MenuRenderer {
    styler: Arc<dyn TextStyler>,
    stats: Arc<dyn RuntimeStats>,
    version: String,
}

impl MenuRenderer {
    pub fn new(styler: Arc<dyn TextStyler>, stats: Arc<dyn RuntimeStats>, version: &str) -> Self {
        Self {
            styler,
            stats,
            version: version.to_string(),
        }
    }

    pub async fn render(
        &self,
        registry: &[CommandDescriptor],
        config: &MenuConfig,
        prefix: &str,
        request: &RequestContext,
    ) -> Result<String> {
        let index = CategoryIndex::build(registry);

        if let Some(requested) = request.text.as_deref()
            && let Some((category, commands)) = index.resolve(requested)
        {
            tracing::debug!("Rendering menu category '{}'", category);
            return self.render_category(category, commands, config, prefix).await;
        }

        tracing::debug!("Rendering full menu ({} categories)", index.len());
        self.render_overview(&index, registry.len(), config, prefix, request)
            .await
    }

    async fn render_category(
        &self,
        category: &str,
        commands: &[String],
        config: &MenuConfig,
        prefix: &str,
    ) -> Result<String> {
        let label = self.style(&category.to_uppercase(), LABEL_STYLE).await?;
        let listing = self.style(&command_list(commands, prefix), BODY_STYLE).await?;
        let body = self
            .style(&layout::category_body(&label, &listing, prefix), BODY_STYLE)
            .await?;

        let header = layout::category_header(
            &config.bot_name,
            &category.to_uppercase(),
            commands.len(),
            prefix,
        );
        Ok(format!("{header}\n{}\n\n{body}", layout::read_more()))
    }

    async fn render_overview(
        &self,
        index: &CategoryIndex,
        plugins: usize,
        config: &MenuConfig,
        prefix: &str,
        request: &RequestContext,
    ) -> Result<String> {
        let uptime = format_duration(self.stats.uptime_secs() * 1000.0);
        let memory = format_bytes(
            self.stats
                .total_memory()
                .saturating_sub(self.stats.free_memory()),
        );

        let header = layout::overview_header(&layout::OverviewHeader {
            bot_name: &config.bot_name,
            owner: &config.owner_name,
            user: &request.push_name,
            plugins,
            uptime: &uptime,
            memory: &memory,
            version: &self.version,
            platform: &request.platform,
        });

        // try_join_all keeps input order regardless of completion order
        let blocks = try_join_all(
            index
                .iter()
                .map(|(category, commands)| self.render_block(category, commands, prefix)),
        )
        .await?;

        let menu = format!(
            "{header}\n{}\n\n{}\n\n{}",
            layout::read_more(),
            blocks.join("\n\n"),
            layout::overview_tip(prefix)
        );
        Ok(menu.trim().to_string())
    }

    async fn render_block(&self, category: &str, commands: &[String], prefix: &str) -> Result<String> {
        let listing = self.style(&command_list(commands, prefix), BODY_STYLE).await?;
        let label = self.style(&category.to_uppercase(), LABEL_STYLE).await?;
        Ok(layout::overview_block(&label, &listing))
    }

    async fn style(&self, text: &str, style: &str) -> Result<String> {
        self.styler
            .style(text, style)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}

fn command_list(commands: &[String], prefix: &str) -> String {
    commands
        .iter()
        .map(|name| layout::command_line(prefix, &sanitize_command_name(name)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fonts::UnicodeStyler;
    use crate::testing::{BarrierStyler, FailingStyler, FixedStats, IdentityStyler, SlowStyler};
    use std::time::Duration;
    use crate::strings::menu::{READ_MORE_CHAR, read_more};

    fn renderer(styler: Arc<dyn TextStyler>) -> MenuRenderer {
        MenuRenderer::new(styler, Arc::new(FixedStats::default()), "0.1.0")
    }

    fn config() -> MenuConfig {
        MenuConfig {
            bot_name: "Kord".to_string(),
            owner_name: "Kenny".to_string(),
            menu_image: None,
        }
    }

    fn request(text: Option<&str>) -> RequestContext {
        RequestContext {
            text: text.map(str::to_string),
            push_name: "alice".to_string(),
            platform: "linux".to_string(),
        }
    }

    fn registry() -> Vec<CommandDescriptor> {
        vec![
            CommandDescriptor::new("menu|help", Some("help")),
            CommandDescriptor::new("ping", None),
            CommandDescriptor::new("", Some("help")),
            CommandDescriptor::new("pong", None),
        ]
    }

    fn marker_count(text: &str) -> usize {
        text.chars().filter(|c| *c == READ_MORE_CHAR).count()
    }

    #[tokio::test]
    async fn test_overview_header_fields() {
        let menu = renderer(Arc::new(IdentityStyler))
            .render(&registry(), &config(), ".", &request(None))
            .await
            .unwrap();

        assert!(menu.starts_with("```┌────═━┈ Kord ┈━═────┐\n"));
        assert!(menu.contains(" ✇ ▸ Owner: Kenny\n"));
        assert!(menu.contains(" ✇ ▸ User: alice\n"));
        // counts every descriptor, including the one without a cmd
        assert!(menu.contains(" ✇ ▸ Plugins: 4\n"));
        assert!(menu.contains(" ✇ ▸ Uptime: 01:01:01\n"));
        assert!(menu.contains(" ✇ ▸ Memory: 1.0 GB\n"));
        assert!(menu.contains(" ✇ ▸ Version: v0.1.0\n"));
        assert!(menu.contains(" ✇ ▸ Platform: linux\n"));
        assert!(menu.ends_with("Tip: Use .menu [category] for specific commands"));
    }

    #[tokio::test]
    async fn test_overview_marker_follows_header_once() {
        let menu = renderer(Arc::new(IdentityStyler))
            .render(&registry(), &config(), ".", &request(None))
            .await
            .unwrap();

        assert_eq!(marker_count(&menu), 4001);
        assert!(menu.contains(&format!("└───────═━┈┈━═──────┘```\n{}\n\n ┏ HELP ┓", read_more())));
    }

    #[tokio::test]
    async fn test_overview_blocks_keep_category_order() {
        let menu = renderer(Arc::new(SlowStyler::new("menu")))
            .render(&registry(), &config(), ".", &request(None))
            .await
            .unwrap();

        let help = menu.find("┏ HELP ┓").unwrap();
        let other = menu.find("┏ OTHER ┓").unwrap();
        assert!(help < other);
        assert!(menu.contains("│ .menu\n"));
        assert!(menu.contains("│ .ping\n│ .pong\n"));
        assert!(menu.contains("┙ \n\n ┏ OTHER ┓\n┍   ─┉─ • ─┉─    ┑ \n"));
    }

    #[tokio::test]
    async fn test_overview_blocks_are_styled_concurrently() {
        // Each block's first styling call waits until both blocks have started.
        let renderer = renderer(Arc::new(BarrierStyler::new(BODY_STYLE, 2)));
        let rendered = tokio::time::timeout(
            Duration::from_secs(5),
            renderer.render(&registry(), &config(), ".", &request(None)),
        )
        .await
        .expect("blocks were styled one after another");

        let menu = rendered.unwrap();
        assert!(menu.find("┏ HELP ┓") < menu.find("┏ OTHER ┓"));
    }

    #[tokio::test]
    async fn test_category_mode_is_case_insensitive() {
        let menu = renderer(Arc::new(IdentityStyler))
            .render(&registry(), &config(), "!", &request(Some("HELP")))
            .await
            .unwrap();

        assert!(menu.contains(" ✇ ▸ Category: HELP\n"));
        assert!(menu.contains(" ✇ ▸ Commands: 1\n"));
        assert!(menu.contains(" ✇ ▸ Prefix: !\n"));
        assert!(menu.contains("│ !menu"));
        assert!(!menu.contains("│ !ping"));
        assert!(!menu.contains("Owner:"));
        assert!(menu.ends_with("Tip: Use !menu to see all categories"));
        assert_eq!(marker_count(&menu), 4001);
        assert!(menu.contains(&format!("└────────═━┈┈━═────────┘```\n{}\n\n     ┏ HELP ┓ ", read_more())));
    }

    #[tokio::test]
    async fn test_unknown_category_falls_back_to_overview() {
        let menu = renderer(Arc::new(IdentityStyler))
            .render(&registry(), &config(), ".", &request(Some("games")))
            .await
            .unwrap();

        assert!(menu.contains("Owner: Kenny"));
        assert!(!menu.contains("Category:"));
    }

    #[tokio::test]
    async fn test_command_names_are_sanitized() {
        let registry = vec![CommandDescriptor::new("test!@#|t", Some("tools"))];
        let menu = renderer(Arc::new(IdentityStyler))
            .render(&registry, &config(), ".", &request(Some("tools")))
            .await
            .unwrap();

        assert!(menu.contains("│ .test\n"));
        assert!(!menu.contains("test!@#"));
    }

    #[tokio::test]
    async fn test_styler_failure_propagates() {
        let result = renderer(Arc::new(FailingStyler))
            .render(&registry(), &config(), ".", &request(None))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_labels_use_monospace_font() {
        let styler = UnicodeStyler;
        let expected = styler.style("OTHER", LABEL_STYLE).await.unwrap();

        let menu = renderer(Arc::new(UnicodeStyler))
            .render(&registry(), &config(), ".", &request(None))
            .await
            .unwrap();
        assert!(menu.contains(&format!(" ┏ {expected} ┓")));
        assert!(!menu.contains("┏ OTHER ┓"));
    }
}
