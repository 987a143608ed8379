use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::{
    cursor::MoveToColumn,
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::logging::LogSink;

const BAR_WIDTH: usize = 30;

/// Single-line determinate progress bar, one tick per written row.
/// Drawing is skipped entirely when stdout is not a terminal or
/// progress was disabled, so output-file semantics never depend on it.
pub struct ProgressBar {
    label: String,
    total: usize,
    pos: usize,
    enabled: bool,
    out: Box<dyn Write>,
}

impl ProgressBar {
    pub fn new(label: &str, total: usize, enabled: bool) -> Result<Self> {
        let enabled = enabled && total > 0 && io::stdout().is_terminal();

        ProgressBar::with_output(label, total, enabled, Box::new(io::stdout()))
    }

    fn with_output(
        label: &str,
        total: usize,
        enabled: bool,
        out: Box<dyn Write>,
    ) -> Result<Self> {
        let mut bar = ProgressBar {
            label: label.to_string(),
            total,
            pos: 0,
            enabled,
            out,
        };
        bar.draw()?;

        Ok(bar)
    }

    pub fn tick(&mut self) -> Result<()> {
        if self.pos < self.total {
            self.pos += 1;
        }
        self.draw()
    }

    /// Writes a full line without corrupting the bar: the bar line is
    /// cleared, the message printed, and the bar redrawn below it.
    pub fn safe_println(&mut self, line: &str) -> Result<()> {
        if !self.enabled {
            eprintln!("{}", line);
            return Ok(());
        }

        self.out
            .queue(MoveToColumn(0))?
            .queue(Clear(ClearType::CurrentLine))?;
        writeln!(self.out, "{}", line)?;
        self.draw()
    }

    /// Leaves the finished bar on its own line.
    pub fn finish(&mut self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        self.draw()?;
        writeln!(self.out)?;
        self.out.flush()?;

        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        self.out
            .queue(MoveToColumn(0))?
            .queue(Clear(ClearType::CurrentLine))?;
        write!(self.out, "{}", render_line(&self.label, self.pos, self.total))?;
        self.out.flush()?;

        Ok(())
    }
}

impl LogSink for ProgressBar {
    fn log_line(&mut self, line: &str) {
        // A failed redraw must not abort the run over a log line.
        let _ = self.safe_println(line);
    }
}

fn render_line(label: &str, pos: usize, total: usize) -> String {
    let filled = if total == 0 {
        BAR_WIDTH
    } else {
        pos * BAR_WIDTH / total
    };

    format!(
        "{} [{}{}] {}/{}",
        label,
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        pos,
        total
    )
}
