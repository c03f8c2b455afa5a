use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use terraroll_core::{PanelBody, ResultBundle, panels};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored human-readable panels
    Console,
    /// Machine-readable JSON
    Json,
    /// Markdown document
    Markdown,
}

/// One successful randomization.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub run: usize,
    #[serde(flatten)]
    pub bundle: ResultBundle,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    runs: &'a [RunRecord],
}

pub fn write_report(out: &mut dyn Write, format: ReportFormat, runs: &[RunRecord]) -> Result<()> {
    match format {
        ReportFormat::Console => write_console_report(out, runs),
        ReportFormat::Json => write_json_report(out, runs),
        ReportFormat::Markdown => write_markdown_report(out, runs),
    }
}

fn write_console_report(out: &mut dyn Write, runs: &[RunRecord]) -> Result<()> {
    for record in runs {
        writeln!(
            out,
            "{}",
            format!("🎲 Run {}", record.run).bright_yellow().bold()
        )?;
        for panel in panels(&record.bundle) {
            writeln!(out, "  {}", panel.title.bold())?;
            match &panel.body {
                PanelBody::Rows { rows } => {
                    for row in rows {
                        writeln!(out, "    {} {}: {}", row.icon, row.label, row.value.green())?;
                    }
                }
                PanelBody::Disabled { message } => writeln!(out, "    {}", message.dimmed())?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_json_report(out: &mut dyn Write, runs: &[RunRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport { runs })?;
    writeln!(out)?;
    Ok(())
}

fn write_markdown_report(out: &mut dyn Write, runs: &[RunRecord]) -> Result<()> {
    writeln!(out, "# Terraroll Results\n")?;
    for record in runs {
        writeln!(out, "## Run {}\n", record.run)?;
        for panel in panels(&record.bundle) {
            writeln!(out, "### {}\n", panel.title)?;
            match &panel.body {
                PanelBody::Rows { rows } => {
                    for row in rows {
                        writeln!(out, "- {} **{}:** {}", row.icon, row.label, row.value)?;
                    }
                }
                PanelBody::Disabled { message } => writeln!(out, "_{message}_")?,
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
