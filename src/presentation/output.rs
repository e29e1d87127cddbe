//! Output Rendering
//!
//! Machine-readable view of a valuation, shared by the `--json` output of
//! every command. Values are unrounded; rounding is a text-output concern.

use serde::Serialize;

use crate::application::ValuationResult;
use crate::domain::entities::{ReportRow, TerminalValue};
use crate::domain::value_objects::ValuationParameters;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// NDJSON events for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// JSON payload of a completed valuation.
#[derive(Debug, Clone, Serialize)]
pub struct ValuationPayload {
    pub unit: String,
    pub params: ValuationParameters,
    pub rows: Vec<ReportRow>,
    pub terminal_value: TerminalValue,
    pub total: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl From<&ValuationResult> for ValuationPayload {
    fn from(result: &ValuationResult) -> Self {
        Self {
            unit: result.unit.clone(),
            params: result.params,
            rows: result.report.rows(),
            terminal_value: result.report.terminal_value(),
            total: result.total(),
            warnings: result.out_of_range.iter().map(|e| e.to_string()).collect(),
        }
    }
}
