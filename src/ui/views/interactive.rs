use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_banner(supports_color: bool, supports_unicode: bool) -> String {
    let mut b = Box::with_style(BoxStyle::Info);
    b.add_empty();
    b.add_line("  dcfcalc - Discounted Cash Flow valuation");
    b.add_empty();
    b.add_line("  Enter projected cash flows, a discount rate (WACC)");
    b.add_line("  and a long-term growth rate. Press Enter to accept");
    b.add_line("  the suggested value.");
    b.add_empty();
    b.render(supports_color, supports_unicode)
}

/// Heading printed before a group of prompts.
pub fn render_step_header(
    step: usize,
    total: usize,
    title: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "\n{} {} {}\n",
        Icon::Form.colored(supports_color, supports_unicode),
        ColoredText::dim(format!("Step {}/{}", step, total)).render(supports_color),
        ColoredText::info(title).bold().render(supports_color)
    )
}
