//! Text rendering of a completed valuation: inputs header, breakdown table,
//! and the closing summary with the headline figure.

use dcfcalc::{FormField, ReportRow, ValuationReport, ValuationResult};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::Box;
use crate::ui::widgets::table::{Align, Table};

/// Two decimals, as shown in the table.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

pub fn render_valuation_header(
    result: &ValuationResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Valuation, "DCF Valuation");
    header.add(FormField::StartYear.label(), result.params.start_year.to_string());
    header.add(
        FormField::Years.label(),
        result.report.years().len().to_string(),
    );
    header.add(
        FormField::DiscountRate.label(),
        format_percent(result.params.discount_rate),
    );
    header.add(
        FormField::GrowthRate.label(),
        format_percent(result.params.growth_rate),
    );
    header.render(supports_color, supports_unicode)
}

/// Year rows, then a rule, then the terminal value and total rows.
pub fn render_report_table(
    report: &ValuationReport,
    unit: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut table = Table::new(&[
        ("Year", Align::Left),
        ("Cash Flow", Align::Right),
        ("Discounted Cash Flow", Align::Right),
    ]);

    let mut summary_started = false;
    for row in report.rows() {
        if row.is_summary() && !summary_started {
            table.add_rule();
            summary_started = true;
        }
        table.add_row(row_cells(&row));
    }

    let mut b = Box::with_title(format!("Amounts in {}", unit));
    b.add_lines(table.render_lines(supports_unicode));
    b.render(supports_color, supports_unicode)
}

fn row_cells(row: &ReportRow) -> Vec<String> {
    vec![
        row.label(),
        row.raw().map(format_amount).unwrap_or_default(),
        format_amount(row.discounted()),
    ]
}

pub fn render_valuation_summary(
    result: &ValuationResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if result.out_of_range.is_empty() {
        ResultSummary::success("Valuation Complete")
    } else {
        ResultSummary::partial("Valuation Complete")
    }
    .with_message(result.summary_line());

    for issue in &result.out_of_range {
        summary.add_warning(issue.to_string());
    }
    summary.render(supports_color, supports_unicode)
}

pub fn render_valuation(
    result: &ValuationResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{}\n{}\n{}",
        render_valuation_header(result, supports_color, supports_unicode),
        render_report_table(&result.report, &result.unit, supports_color, supports_unicode),
        render_valuation_summary(result, supports_color, supports_unicode)
    )
}
