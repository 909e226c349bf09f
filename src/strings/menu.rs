//! # Menu Layout
//!
//! Box-drawing fragments and fixed texts for the help menu and the codex responder.

/// Right-to-left mark repeated to push the menu body behind a "read more" fold.
pub const READ_MORE_CHAR: char = '\u{200F}';
pub const READ_MORE_REPEAT: usize = 4001;

pub const BORDER_TOP: &str = "┍   ─┉─ • ─┉─    ┑ ";
pub const BORDER_BOTTOM: &str = "┕    ─┉─ • ─┉─   ┙ ";

pub fn read_more() -> String {
    READ_MORE_CHAR.to_string().repeat(READ_MORE_REPEAT)
}

pub fn command_line(prefix: &str, name: &str) -> String {
    format!("│ {prefix}{name}")
}

pub fn category_header(
    bot_name: &str,
    category: &str,
    count: usize,
    prefix: &str,
) -> String {
    format!(
        "```┌────═━┈ {bot_name} ┈━═────┐\n \
         ✇ ▸ Category: {category}\n \
         ✇ ▸ Commands: {count}\n \
         ✇ ▸ Prefix: {prefix}\n\
         └────────═━┈┈━═────────┘```"
    )
}

pub struct OverviewHeader<'a> {
    pub bot_name: &'a str,
    pub owner: &'a str,
    pub user: &'a str,
    pub plugins: usize,
    pub uptime: &'a str,
    pub memory: &'a str,
    pub version: &'a str,
    pub platform: &'a str,
}

pub fn overview_header(h: &OverviewHeader<'_>) -> String {
    format!(
        "```┌────═━┈ {} ┈━═────┐\n \
         ✇ ▸ Owner: {}\n \
         ✇ ▸ User: {}\n \
         ✇ ▸ Plugins: {}\n \
         ✇ ▸ Uptime: {}\n \
         ✇ ▸ Memory: {}\n \
         ✇ ▸ Version: v{}\n \
         ✇ ▸ Platform: {}\n\
         └───────═━┈┈━═──────┘```",
        h.bot_name, h.owner, h.user, h.plugins, h.uptime, h.memory, h.version, h.platform
    )
}

/// Body of a single-category menu, before styling.
pub fn category_body(label: &str, commands: &str, prefix: &str) -> String {
    format!(
        "     ┏ {label} ┓ \n{BORDER_TOP}\n{commands}\n{BORDER_BOTTOM}\n\n{}",
        category_tip(prefix)
    )
}

/// One block of the full listing.
pub fn overview_block(label: &str, commands: &str) -> String {
    format!(" ┏ {label} ┓\n{BORDER_TOP}\n{commands}\n{BORDER_BOTTOM}")
}

pub fn category_tip(prefix: &str) -> String {
    format!("Tip: Use {prefix}menu to see all categories")
}

pub fn overview_tip(prefix: &str) -> String {
    format!("Tip: Use {prefix}menu [category] for specific commands")
}

pub const CODEX_TRIGGER: &str = "codex help";

pub fn codex_menu(hours: u64, minutes: u64) -> String {
    concat!(
        "╔═══〔❍CODEX AI❍═══❒\n",
        "║╭───────────────◆\n",
        "║│ ❍VERSION❍ 1.1.0\n",
        "║╰───────────────◆\n",
        "╚══════════════════❒\n",
        "╔═══〔❍CODEX AI❍═══❒\n",
        "║╭───────────────◆\n",
        "║│ ❍CODEX AI MENU❍ \n",
        "║╰───────────────◆\n",
        "╚══════════════════❒\n",
        "╔══════════════════❒\n",
        "║  CODEX LOCK [Time]\n",
        "║  CODEX UNLOCK [Time]\n",
        "║  CODEX REMINDER\n",
        "║  CODEX PING\n",
        "║  CODEX AFTER\n",
        "║  CODEX SMD\n",
        "║  CODEX HACK\n",
        "║  CODEX AI RESPONDER\n",
        "║  CODEX YO\n",
        "║  CODEX!\n",
        "║  CODEX LOCK\n",
        "║  CODEX UNLOCK\n",
        "║  UPTIME: {h}h {m}m\n",
        "║  HOST COMING SOON\n",
        "║  OTHER CMDS COMING SOON\n",
        "║  DEVELOPED BY \u{2068}✞CODEX✞\n",
        "╚══════════════════❒"
    )
    .replace("{h}", &hours.to_string())
    .replace("{m}", &minutes.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codex_menu_keeps_isolate_mark() {
        let card = codex_menu(0, 0);
        assert!(card.contains('\u{2068}'));
        assert!(card.contains("║  DEVELOPED BY \u{2068}✞CODEX✞\n"));
        assert!(card.contains("║  UPTIME: 0h 0m\n"));
    }

    #[test]
    fn test_read_more_length() {
        let marker = read_more();
        assert_eq!(marker.chars().count(), READ_MORE_REPEAT);
        assert!(marker.chars().all(|c| c == READ_MORE_CHAR));
    }
}
