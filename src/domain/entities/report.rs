//! Valuation report entity
//!
//! The report is built once by the calculator and never mutated afterwards.

use serde::Serialize;

/// Cash flow of one projection year, raw and discounted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyResult {
    pub year: i32,
    pub cash_flow: f64,
    pub discounted_cash_flow: f64,
}

/// Gordon-growth terminal value at the end of the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TerminalValue {
    pub value: f64,
    pub discounted: f64,
}

/// Per-year breakdown plus terminal value and total valuation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationReport {
    years: Vec<YearlyResult>,
    terminal_value: TerminalValue,
    total: f64,
}

/// One displayed row of the report table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportRow {
    Year(YearlyResult),
    TerminalValue(TerminalValue),
    Total { value: f64 },
}

impl ValuationReport {
    /// Assemble a report; `total` must already be the sum of the discounted
    /// yearly cash flows and the discounted terminal value.
    pub(crate) fn new(years: Vec<YearlyResult>, terminal_value: TerminalValue, total: f64) -> Self {
        Self {
            years,
            terminal_value,
            total,
        }
    }

    pub fn years(&self) -> &[YearlyResult] {
        &self.years
    }

    pub fn terminal_value(&self) -> TerminalValue {
        self.terminal_value
    }

    /// Total DCF valuation.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Sum of the discounted explicit-period cash flows.
    pub fn explicit_value(&self) -> f64 {
        self.years.iter().map(|y| y.discounted_cash_flow).sum()
    }

    /// All rows in display order: yearly rows, terminal value, total.
    pub fn rows(&self) -> Vec<ReportRow> {
        let mut rows: Vec<ReportRow> = self.years.iter().copied().map(ReportRow::Year).collect();
        rows.push(ReportRow::TerminalValue(self.terminal_value));
        rows.push(ReportRow::Total { value: self.total });
        rows
    }
}

impl ReportRow {
    /// First column of the table: the year, or the summary row name.
    pub fn label(&self) -> String {
        match self {
            ReportRow::Year(y) => y.year.to_string(),
            ReportRow::TerminalValue(_) => "Terminal Value".to_string(),
            ReportRow::Total { .. } => "TOTAL DCF".to_string(),
        }
    }

    /// Undiscounted value; empty for the total row.
    pub fn raw(&self) -> Option<f64> {
        match self {
            ReportRow::Year(y) => Some(y.cash_flow),
            ReportRow::TerminalValue(tv) => Some(tv.value),
            ReportRow::Total { .. } => None,
        }
    }

    pub fn discounted(&self) -> f64 {
        match self {
            ReportRow::Year(y) => y.discounted_cash_flow,
            ReportRow::TerminalValue(tv) => tv.discounted,
            ReportRow::Total { value } => *value,
        }
    }

    pub fn is_summary(&self) -> bool {
        !matches!(self, ReportRow::Year(_))
    }
}
