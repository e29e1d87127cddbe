//! The valuation input form.
//!
//! The form logic is written against [`Prompter`] so it can be driven by a
//! scripted prompter in tests; [`DialoguerPrompter`] is the terminal version.

use std::str::FromStr;

use anyhow::Result;
use dialoguer::{Confirm, Input};

use dcfcalc::config::DefaultsConfig;
use dcfcalc::domain::value_objects::{default_cash_flow, snap_rate, RATE_STEP};
use dcfcalc::{CashFlowProjection, DcfError, FormField, ValuationParameters, ValuationRequest};

use crate::ui::theme::DcfTheme;

/// Validation callback: `Err(message)` rejects the entry and re-prompts.
pub type Validator<'v, T> = &'v dyn Fn(&T) -> std::result::Result<(), String>;

pub trait Prompter {
    /// Ask for a value until one parses and passes `validate`.
    fn input<T>(&mut self, prompt: &str, default: T, validate: Validator<'_, T>) -> Result<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: ToString;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Announce a group of prompts.
    fn section(&mut self, step: usize, total: usize, title: &str);
}

pub struct DialoguerPrompter {
    theme: DcfTheme,
    color: bool,
    unicode: bool,
}

impl DialoguerPrompter {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self {
            theme: DcfTheme::new(color, unicode),
            color,
            unicode,
        }
    }
}

impl Prompter for DialoguerPrompter {
    fn input<T>(&mut self, prompt: &str, default: T, validate: Validator<'_, T>) -> Result<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: ToString,
    {
        let value = Input::<T>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .validate_with(|v: &T| validate(v))
            .interact_text()?;
        Ok(value)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(answer)
    }

    fn section(&mut self, step: usize, total: usize, title: &str) {
        print!(
            "{}",
            crate::ui::views::interactive::render_step_header(
                step,
                total,
                title,
                self.color,
                self.unicode
            )
        );
    }
}

const STEPS: usize = 3;

/// Collect every input of a valuation.
///
/// Declining the final confirmation returns [`DcfError::Aborted`].
pub fn run_form<P: Prompter>(
    prompter: &mut P,
    defaults: &DefaultsConfig,
) -> Result<ValuationRequest> {
    prompter.section(1, STEPS, "Horizon");
    let start_year: i32 = prompter.input(
        FormField::StartYear.label(),
        clamp_default(FormField::StartYear, f64::from(defaults.start_year)) as i32,
        &|v: &i32| check(FormField::StartYear, f64::from(*v)),
    )?;
    let years: u32 = prompter.input(
        FormField::Years.label(),
        clamp_default(FormField::Years, f64::from(defaults.years)) as u32,
        &|v: &u32| check(FormField::Years, f64::from(*v)),
    )?;

    prompter.section(2, STEPS, "Cash flows");
    let mut cash_flows = Vec::with_capacity(years as usize);
    for i in 0..years as usize {
        let year = i64::from(start_year) + i as i64;
        let value: f64 = prompter.input(
            &format!("Cash flow {} ({})", year, defaults.unit),
            default_cash_flow(i),
            &|v: &f64| {
                if v.is_finite() {
                    Ok(())
                } else {
                    Err("cash flow must be a finite number".to_string())
                }
            },
        )?;
        cash_flows.push(value);
    }

    prompter.section(3, STEPS, "Rates");
    let discount_rate = snap_rate(prompter.input(
        FormField::DiscountRate.label(),
        snap_rate(clamp_default(FormField::DiscountRate, defaults.discount_rate)),
        &|v: &f64| check(FormField::DiscountRate, snap_rate(*v)),
    )?);
    let growth_default =
        clamp_default(FormField::GrowthRate, defaults.growth_rate).min(discount_rate - RATE_STEP);
    let growth_rate = snap_rate(prompter.input(
        FormField::GrowthRate.label(),
        snap_rate(growth_default),
        &|v: &f64| {
            let g = snap_rate(*v);
            check(FormField::GrowthRate, g)?;
            ValuationParameters::new(start_year, discount_rate, g)
                .validate()
                .map_err(|e| e.to_string())
        },
    )?);

    if !prompter.confirm("Compute DCF?", true)? {
        return Err(DcfError::Aborted.into());
    }

    Ok(ValuationRequest::new(
        ValuationParameters::new(start_year, discount_rate, growth_rate),
        CashFlowProjection::new(cash_flows)?,
        defaults.unit.clone(),
    ))
}

fn check(field: FormField, value: f64) -> std::result::Result<(), String> {
    field.check(value).map_err(|e| e.to_string())
}

/// Config defaults may lie outside the form bounds; pull them inside.
fn clamp_default(field: FormField, value: f64) -> f64 {
    let (min, max) = field.bounds();
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}
