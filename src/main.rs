//! Headless drop simulator (default binary).
//!
//! Drops random shapes into an empty grid and prints the result, either as a
//! colored text picture or as JSON. Configured through `SMOCKS_*` environment
//! variables, logging through `RUST_LOG`.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::style::{self, Stylize};
use crossterm::QueueableCommand;

use smocks::config::{OutputFormat, SimConfig};
use smocks::sim::{color_letter, render_plain, DropSimulator, SimReport};
use smocks::types::Color;

fn main() -> Result<()> {
    env_logger::init();

    let config = SimConfig::from_env();
    log::debug!("config: {config:?}");

    let format = config.format;
    let report = DropSimulator::new(config).run()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report).context("writing JSON report")?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_colored(&mut out, &report)?,
    }
    out.flush()?;
    Ok(())
}

fn write_colored(out: &mut impl Write, report: &SimReport) -> Result<()> {
    if !crossterm::tty::IsTty::is_tty(&io::stdout()) {
        out.write_all(render_plain(report).as_bytes())?;
        return Ok(());
    }

    for row in &report.grid {
        for cell in row {
            match cell {
                Some(color) => {
                    let letter = color_letter(*color).to_string().with(term_color(*color));
                    out.queue(style::PrintStyledContent(letter))?;
                }
                None => {
                    out.queue(style::Print('.'))?;
                }
            }
        }
        out.queue(style::Print('\n'))?;
    }
    writeln!(
        out,
        "{} shapes{}",
        report.placed.len(),
        if report.game_over { ", game over" } else { "" }
    )?;
    Ok(())
}

fn term_color(color: Color) -> style::Color {
    match color {
        Color::Blue => style::Color::Blue,
        Color::Orange => style::Color::DarkYellow,
        Color::Purple => style::Color::Magenta,
        Color::Red => style::Color::Red,
        Color::Teal => style::Color::Cyan,
        Color::Yellow => style::Color::Yellow,
    }
}
