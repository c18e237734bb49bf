//! Form-payload parsing with documented per-field fallbacks
//!
//! Plan inputs arrive from a web form as JSON where every field may be a
//! number, a numeric string ("25,641"), an empty string, or absent entirely.
//! This module is the single validated-input boundary: each field passes
//! through one fallback rule (missing / non-numeric / negative -> the named
//! default from [`super::data`]) before the pure projection functions run.
//! Every substitution is logged so a silently-defaulted illustration can be
//! traced.

use log::warn;
use serde::Deserialize;
use serde_json::Value;

use super::data::{
    PlanInputs, DEFAULT_CURRENT_AGE, DEFAULT_FEE_PCT, DEFAULT_HORIZON_AGE, DEFAULT_INFLATION_PCT,
    DEFAULT_RATE_OF_RETURN_PCT, DEFAULT_RETIREMENT_AGE, DEFAULT_RETIREMENT_TAX_PCT,
    DEFAULT_STOP_SAVING_AGE, DEFAULT_WORKING_TAX_PCT,
};

/// Raw plan inputs as they come off the wire.
///
/// Field names match the form payload's camelCase keys. Every field is
/// optional and may be a JSON number or string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlanInputs {
    #[serde(default)]
    pub current_age: Option<Value>,
    #[serde(default)]
    pub stop_saving_age: Option<Value>,
    #[serde(default)]
    pub retirement_age: Option<Value>,
    #[serde(default)]
    pub horizon_age: Option<Value>,
    #[serde(default)]
    pub starting_balance: Option<Value>,
    #[serde(default)]
    pub annual_contribution: Option<Value>,
    #[serde(default)]
    pub annual_employer_match: Option<Value>,
    #[serde(default)]
    pub rate_of_return: Option<Value>,
    #[serde(default)]
    pub annual_fee_rate: Option<Value>,
    #[serde(default)]
    pub working_tax_rate: Option<Value>,
    #[serde(default)]
    pub retirement_tax_rate: Option<Value>,
    #[serde(default)]
    pub inflation_rate: Option<Value>,
}

impl RawPlanInputs {
    /// Deserialize a raw form payload from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve every field to a typed value, substituting named defaults.
    ///
    /// This never fails: a partially-filled form yields a plausible
    /// `PlanInputs` whose age ordering may still reject the projection.
    pub fn parse(&self) -> PlanInputs {
        PlanInputs {
            current_age: age_or(&self.current_age, "currentAge", DEFAULT_CURRENT_AGE),
            stop_saving_age: age_or(&self.stop_saving_age, "stopSavingAge", DEFAULT_STOP_SAVING_AGE),
            retirement_age: age_or(&self.retirement_age, "retirementAge", DEFAULT_RETIREMENT_AGE),
            horizon_age: age_or(&self.horizon_age, "horizonAge", DEFAULT_HORIZON_AGE),
            starting_balance: amount_or(&self.starting_balance, "startingBalance", 0.0),
            annual_contribution: amount_or(&self.annual_contribution, "annualContribution", 0.0),
            annual_employer_match: amount_or(
                &self.annual_employer_match,
                "annualEmployerMatch",
                0.0,
            ),
            rate_of_return: amount_or(
                &self.rate_of_return,
                "rateOfReturn",
                DEFAULT_RATE_OF_RETURN_PCT,
            ),
            annual_fee_rate: fee_or(&self.annual_fee_rate),
            working_tax_rate: amount_or(
                &self.working_tax_rate,
                "workingTaxRate",
                DEFAULT_WORKING_TAX_PCT,
            ),
            retirement_tax_rate: amount_or(
                &self.retirement_tax_rate,
                "retirementTaxRate",
                DEFAULT_RETIREMENT_TAX_PCT,
            ),
            inflation_rate: amount_or(&self.inflation_rate, "inflationRate", DEFAULT_INFLATION_PCT),
        }
    }
}

/// Extract a numeric value from a JSON number or numeric string.
///
/// Strings may carry currency formatting ("$25,641" or "6.3%"); empty and
/// non-numeric strings yield None.
fn numeric(value: &Option<Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| !matches!(c, '$' | ',' | '%' | ' '))
                .collect();
            cleaned.parse().ok()
        }
        _ => None,
    }
}

/// Non-negative monetary/percentage field with a named fallback
fn amount_or(value: &Option<Value>, field: &str, default: f64) -> f64 {
    match numeric(value) {
        Some(v) if v >= 0.0 => v,
        Some(v) => {
            warn!("{field}: negative value {v} replaced with default {default}");
            default
        }
        None => {
            if value.is_some() {
                warn!("{field}: non-numeric value {value:?} replaced with default {default}");
            }
            default
        }
    }
}

/// Age field with a named fallback, truncated to a whole age
fn age_or(value: &Option<Value>, field: &str, default: u8) -> u8 {
    let v = amount_or(value, field, default as f64);
    if (0.0..=120.0).contains(&v) {
        v as u8
    } else {
        warn!("{field}: age {v} out of range, replaced with default {default}");
        default
    }
}

/// Fee field: the "included" sentinel means no explicit fee (zero), which is
/// distinct from a missing or unusable value falling back to DEFAULT_FEE_PCT.
fn fee_or(value: &Option<Value>) -> f64 {
    if let Some(Value::String(s)) = value {
        if s.trim().eq_ignore_ascii_case("included") {
            return 0.0;
        }
    }
    amount_or(value, "annualFeeRate", DEFAULT_FEE_PCT)
}
