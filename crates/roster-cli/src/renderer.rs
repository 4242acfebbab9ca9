//! Terminal output for the markdown produced by `roster_core::display`.
//!
//! Rich mode styles the markdown with termimad; plain mode (`--no-color`)
//! prints it untouched so it can be piped or compared in tests.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Renders markdown either styled or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Titles in yellow, ids in dim inline code
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::AnsiValue(245));
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    /// Prints `markdown` to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match line_accent(line) {
                // Headers keep their hashes so grid sections stay scannable
                Some(color) => println!("{color}{line}{RESET}"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

/// Colour for lines printed verbatim instead of through the skin.
fn line_accent(line: &str) -> Option<&'static str> {
    if line.starts_with('#') {
        Some(BLUE)
    } else if line.starts_with("Success:") {
        Some(GREEN)
    } else if line.starts_with("Error:") {
        Some(RED)
    } else {
        None
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
