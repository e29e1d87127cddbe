//! Plain-text table with per-column alignment.
//!
//! Columns are sized by display width (`unicode-width`), separated by two
//! spaces. A horizontal rule follows the header and may be inserted before
//! any row.

use crate::ui::primitives::border::BorderSet;
use crate::ui::widgets::r#box::visible_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone)]
enum Line {
    Cells(Vec<String>),
    Rule,
}

#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    lines: Vec<Line>,
}

const GAP: &str = "  ";

impl Table {
    pub fn new(columns: &[(&str, Align)]) -> Self {
        Self {
            headers: columns.iter().map(|(h, _)| h.to_string()).collect(),
            aligns: columns.iter().map(|(_, a)| *a).collect(),
            lines: Vec::new(),
        }
    }

    /// Missing cells render empty; extra cells are ignored.
    pub fn add_row(&mut self, cells: Vec<String>) {
        self.lines.push(Line::Cells(cells));
    }

    pub fn add_rule(&mut self) {
        self.lines.push(Line::Rule);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for line in &self.lines {
            if let Line::Cells(cells) = line {
                for (w, cell) in widths.iter_mut().zip(cells) {
                    *w = (*w).max(visible_width(cell));
                }
            }
        }
        widths
    }

    fn format_cells(&self, cells: &[String], widths: &[usize]) -> String {
        let parts: Vec<String> = widths
            .iter()
            .zip(&self.aligns)
            .enumerate()
            .map(|(i, (&width, align))| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = " ".repeat(width.saturating_sub(visible_width(cell)));
                match align {
                    Align::Left => format!("{cell}{pad}"),
                    Align::Right => format!("{pad}{cell}"),
                }
            })
            .collect();
        parts.join(GAP).trim_end().to_string()
    }

    /// Rendered lines without trailing whitespace.
    pub fn render_lines(&self, supports_unicode: bool) -> Vec<String> {
        let widths = self.widths();
        let total = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
        let rule = BorderSet::new(supports_unicode).horizontal.repeat(total);

        let mut out = vec![self.format_cells(&self.headers, &widths), rule.clone()];
        for line in &self.lines {
            match line {
                Line::Cells(cells) => out.push(self.format_cells(cells, &widths)),
                Line::Rule => out.push(rule.clone()),
            }
        }
        out
    }
}
