//! Output formatting for search summaries.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use pathsearch_lib::SearchSummary;

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Render `summary` in `format`. The palette only affects text output.
pub fn render(summary: &SearchSummary, format: OutputFormat, palette: ColorPalette) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(summary, palette)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(summary).context("failed to serialise summary")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write the rendered summary to `writer`.
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: &SearchSummary,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    let rendered = render(summary, format, palette)?;
    writer
        .write_all(rendered.as_bytes())
        .context("failed to write search output")?;
    Ok(())
}

fn render_text(summary: &SearchSummary, palette: ColorPalette) -> String {
    let plain = summary.render_plain_text();
    if palette == ColorPalette::plain() {
        return plain;
    }

    let mut buffer = String::with_capacity(plain.len());
    for (index, line) in plain.lines().enumerate() {
        let trimmed = line.trim_start();
        let color = if index == 0 {
            palette.white_bold
        } else if trimmed.starts_with("path:") {
            palette.green
        } else if trimmed.starts_with("no path found") {
            palette.red
        } else if trimmed.starts_with("explored") || trimmed.starts_with("moves:") {
            palette.gray
        } else {
            ""
        };
        if color.is_empty() {
            buffer.push_str(line);
        } else {
            buffer.push_str(color);
            buffer.push_str(line);
            buffer.push_str(palette.reset);
        }
        buffer.push('\n');
    }
    buffer
}
