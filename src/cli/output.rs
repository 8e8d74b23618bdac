//! Terminal output helpers
//!
//! Plain-text rendering of the palette for the CLI, and the writer that tees
//! log output to the console and a file.

use crate::palette::{CommandPalette, Row};
use std::io::Write;

/// Render the search line and the rows, one per line
pub fn render_palette(palette: &CommandPalette, all: bool) -> String {
    let mut lines = Vec::new();

    if palette.query().is_empty() {
        lines.push(format!("> ({})", palette.placeholder()));
    } else {
        lines.push(format!("> {}", palette.query()));
    }

    let rows = palette.rows();
    if palette.visible().is_empty() {
        lines.push("  (no items)".to_string());
    }

    for row in &rows {
        lines.push(render_row(row));
    }

    if all {
        for (index, item) in palette.visible().iter().enumerate().skip(rows.len()) {
            let marker = if palette.selected_index() == Some(index) { ">" } else { " " };
            lines.push(format!("{marker}       {}", item.title()));
        }
    } else if palette.visible().len() > rows.len() {
        lines.push(format!("  ... {} more", palette.visible().len() - rows.len()));
    }

    lines.join("\n")
}

/// One row: selection marker, shortcut, image, title, subtitle and badge
pub fn render_row(row: &Row<'_>) -> String {
    let marker = if row.selected { ">" } else { " " };
    let shortcut = row.shortcut.as_deref().unwrap_or("");

    let mut line = format!("{marker} {shortcut:<4} ");
    if let Some(image) = row.image {
        line.push_str(&format!("[{image}] "));
    }
    line.push_str(row.item.title());
    if let Some(subtitle) = row.item.subtitle_text() {
        line.push_str(&format!(" - {subtitle}"));
    }
    if let Some(badge) = row.item.badge_text() {
        line.push_str(&format!("  ({badge})"));
    }
    line
}

/// Writer that sends everything to stderr and a log file
pub struct DualWriter {
    pub console: std::io::Stderr,
    pub file: std::fs::File,
}

impl Write for DualWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.console.write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.console.flush()?;
        self.file.flush()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Catalog, Item, PaletteOptions};

    fn palette() -> CommandPalette {
        let catalog = Catalog::new(vec![
            Item::new("Fix Grammar").subtitle("Edit").badge("#"),
            Item::new("Fix Spelling"),
            Item::new("Emphasize"),
        ]);
        CommandPalette::new(
            catalog,
            PaletteOptions::default().show_images(false).max_items_shown(1),
        )
    }

    #[test]
    fn test_dual_writer_copies_whole_buffer_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kbar.log");
        let line = "palette opened\n".repeat(512);

        {
            let mut writer = DualWriter {
                console: std::io::stderr(),
                file: std::fs::File::create(&path).unwrap(),
            };
            let written = writer.write(line.as_bytes()).unwrap();
            assert_eq!(written, line.len());
            writer.flush().unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), line);
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let mut palette = palette();
        palette.open();

        let text = render_palette(&palette, false);

        assert!(text.starts_with("> (Search)"));
        assert!(text.contains("(no items)"));
    }

    #[test]
    fn test_render_rows_and_overflow() {
        let mut palette = palette();
        palette.open();
        palette.set_query("fix");

        let text = render_palette(&palette, false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "> fix");
        assert_eq!(lines[1], "> ⏎    Fix Grammar - Edit  (#)");
        assert_eq!(lines[2], "  ... 1 more");
    }

    #[test]
    fn test_render_all_rows() {
        let mut palette = palette();
        palette.open();
        palette.set_query("fix");
        palette.select_next();

        let text = render_palette(&palette, true);

        assert!(text.contains(">       Fix Spelling"));
        assert!(!text.contains("more"));
    }
}
