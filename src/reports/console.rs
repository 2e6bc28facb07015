use crate::Result;
use crate::extract::NOT_AVAILABLE;
use crate::misc::ColorMode;
use crate::reports::ReportTable;
use core::fmt::{self, Write};
use owo_colors::OwoColorize;
use std::io::{IsTerminal, stdout};
use terminal_size::{Width, terminal_size};

const DEFAULT_TERMINAL_WIDTH: usize = 120;
const SEPARATOR_WIDTH: usize = 40;
const MIN_VALUE_WIDTH: usize = 20;

/// Generate a terminal rendering of the snapshot table: one labeled block per
/// host, in input order.
pub fn generate<W: Write>(table: &ReportTable, color: ColorMode, writer: &mut W) -> Result<()> {
    ConsoleReporter::new(writer, color).generate_report(table)
}

struct ConsoleReporter<'a, W: Write> {
    writer: &'a mut W,
    colors: ColorScheme,
}

impl<'a, W: Write> ConsoleReporter<'a, W> {
    fn new(writer: &'a mut W, color_mode: ColorMode) -> Self {
        Self {
            writer,
            colors: ColorScheme::new(color_mode),
        }
    }

    fn generate_report(&mut self, table: &ReportTable) -> Result<()> {
        let layout = Layout::new(table);

        for row in 0..table.row_count() {
            if row > 0 {
                self.write_separator()?;
            }
            self.write_host_block(table, row, &layout)?;
        }
        Ok(())
    }

    fn write_separator(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        self.colors.write_styled_line(self.writer, "═", SEPARATOR_WIDTH, TextStyle::Dimmed)?;
        writeln!(self.writer)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_host_block(&mut self, table: &ReportTable, row: usize, layout: &Layout) -> Result<()> {
        for column in table.columns() {
            let value = table.cell(row, column).unwrap_or("");
            let truncated = truncate(value, layout.max_value_width);

            self.colors.write_styled_text(
                self.writer,
                &format!("{column:<width$}", width = layout.label_width),
                TextStyle::Bold,
            )?;
            write!(self.writer, " : ")?;

            if value == NOT_AVAILABLE {
                self.colors.write_styled_text(self.writer, &truncated, TextStyle::Dimmed)?;
            } else {
                write!(self.writer, "{truncated}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone)]
enum TextStyle {
    Bold,
    Dimmed,
}

struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    fn new(color_mode: ColorMode) -> Self {
        let enabled = matches!(color_mode, ColorMode::Always) || (matches!(color_mode, ColorMode::Auto) && stdout().is_terminal());
        Self { enabled }
    }

    fn write_styled_text<W: Write>(&self, writer: &mut W, text: &str, style: TextStyle) -> fmt::Result {
        if !self.enabled {
            return write!(writer, "{text}");
        }
        match style {
            TextStyle::Bold => write!(writer, "{}", text.bold()),
            TextStyle::Dimmed => write!(writer, "{}", text.dimmed()),
        }
    }

    fn write_styled_line<W: Write>(&self, writer: &mut W, ch: &str, width: usize, style: TextStyle) -> fmt::Result {
        if !self.enabled {
            return write!(writer, "{}", ch.repeat(width));
        }
        match style {
            TextStyle::Bold => write!(writer, "{}", ch.repeat(width).bold()),
            TextStyle::Dimmed => write!(writer, "{}", ch.repeat(width).dimmed()),
        }
    }
}

struct Layout {
    label_width: usize,
    max_value_width: usize,
}

impl Layout {
    fn new(table: &ReportTable) -> Self {
        let label_width = table.columns().iter().map(String::len).max().unwrap_or(0);
        let max_value_width = detect_terminal_width().saturating_sub(label_width + 3).max(MIN_VALUE_WIDTH);

        Self {
            label_width,
            max_value_width,
        }
    }
}

fn truncate(text: &str, max_width: usize) -> String {
    if text.len() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    for ch in text.chars() {
        if result.len() + 1 >= max_width {
            break;
        }
        result.push(ch);
    }

    format!("{result}…")
}

fn detect_terminal_width() -> usize {
    if stdout().is_terminal() {
        terminal_size().map_or(DEFAULT_TERMINAL_WIDTH, |(Width(w), _)| usize::from(w))
    } else {
        DEFAULT_TERMINAL_WIDTH
    }
}
