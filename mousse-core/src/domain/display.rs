//! Human-readable renderings of numeric fields.
//!
//! Display strings are derived when a record is served and never stored.
//! Formatting is best-effort: a missing or unreadable value yields `None`.
//! Text reading as a non-finite number ("nan", "inf") is formatted by Rust,
//! giving `NaN €/kg` or `inf €/kg`.

use super::cell::CellValue;

pub fn cost_display(value: Option<&CellValue>) -> Option<String> {
    value
        .and_then(CellValue::as_f64)
        .map(|cost| format!("{cost:.2} €/kg"))
}

pub fn co2_display(value: Option<&CellValue>) -> Option<String> {
    value
        .and_then(CellValue::as_f64)
        .map(|co2| format!("{co2:.2} kgCO₂e/kg"))
}

/// Renders the density as stored. Reals use Rust's shortest round-trip
/// form, so extreme magnitudes print as `1e16` and `1e-5` rather than
/// `1e+16` and `1e-05`.
pub fn density_display(value: Option<&CellValue>) -> Option<String> {
    value.map(|density| format!("{density} kg/m³"))
}
