//! Per-record scoring: formulas, threshold classifiers, narrative text and
//! the table-wide pay equity pass.

pub mod classify;
pub mod formulas;
pub mod narrative;
pub mod pay_equity;

pub use classify::{absence_risk, attrition_level, behavioral_risk_level, promotion_readiness};
pub use formulas::{
    attrition_risk, behavioral_risk, predicted_performance, promotion_score, training_impact,
};
pub use narrative::{alerts, recommendations, top_risk_factors};
pub use pay_equity::{pay_equity_gaps, DepartmentSalaryMeans};

/// Rounds the exact binary value of `value` to `places` decimals, breaking true
/// ties to even, and folds `-0.0` into `0.0`.
///
/// Scaling by a power of ten first would shift values such as `0.0375` (stored
/// just below the tie) onto the tie, so the decimal expansion is rounded instead.
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let places = usize::try_from(places).unwrap_or(0);
    let rounded = format!("{:.*}", places, value)
        .parse::<f64>()
        .unwrap_or(value);
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
