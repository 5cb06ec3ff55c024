//! Terminal rendering of markdown output with a plain text fallback.

use serde::Serialize;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders the markdown produced by the core display types, styled through
/// termimad or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Print markdown to stdout.
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }
        // headers keep their hashes so nesting stays visible
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else if line.starts_with('|') {
                println!("{line}");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }

    /// Print a value as pretty JSON, never styled.
    pub fn render_json<T: Serialize + ?Sized>(
        &self,
        value: &T,
    ) -> serde_json::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
