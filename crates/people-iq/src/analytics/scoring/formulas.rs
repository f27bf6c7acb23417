use super::round_to;
use crate::analytics::record::{defaults, fields, EmployeeRecord};

const SCORE_PLACES: i32 = 3;
const PERFORMANCE_PLACES: i32 = 1;

// Attrition risk: additive factors on top of a base rate.
const ATTRITION_BASE: f64 = 0.2;
const ATTRITION_LOW_ENGAGEMENT: f64 = 0.3;
const ATTRITION_HIGH_BURNOUT: f64 = 0.2;
const ATTRITION_STALLED_PROMOTION: f64 = 0.2;
const ATTRITION_ENGAGEMENT_CUTOFF: f64 = 2.0;
const ATTRITION_BURNOUT_CUTOFF: f64 = 0.7;
const ATTRITION_PROMOTION_CUTOFF: f64 = 0.4;
const ATTRITION_TENURE_CUTOFF: f64 = 3.0;

// Promotion score weights sum to 1.0.
const PROMOTION_PERFORMANCE_WEIGHT: f64 = 0.35;
const PROMOTION_OVERALL_WEIGHT: f64 = 0.25;
const PROMOTION_TRAINING_WEIGHT: f64 = 0.15;
const PROMOTION_TENURE_WEIGHT: f64 = 0.15;
const PROMOTION_NO_STAGNATION_BONUS: f64 = 0.10;
const RATING_SCALE: f64 = 5.0;
const TRAINING_SATURATION: f64 = 6.0;
const TENURE_SATURATION_YEARS: f64 = 8.0;

const PREDICTED_CURRENT_WEIGHT: f64 = 0.5;
const PREDICTED_OVERALL_WEIGHT: f64 = 0.3;
const PREDICTED_TREND_WEIGHT: f64 = 0.2;
const PERFORMANCE_FLOOR: f64 = 1.0;
const PERFORMANCE_CEILING: f64 = 5.0;

const BEHAVIORAL_BURNOUT_WEIGHT: f64 = 0.5;
const BEHAVIORAL_ABSENCE_WEIGHT: f64 = 0.3;
const BEHAVIORAL_FLAG_WEIGHT: f64 = 0.2;
const ABSENCE_SATURATION_DAYS: f64 = 20.0;

const TRAINING_RECENCY_WEIGHT: f64 = 0.6;
const TRAINING_VOLUME_WEIGHT: f64 = 0.4;
const TRAINING_RECENCY_HORIZON_DAYS: f64 = 365.0;

fn unit_score(value: f64) -> f64 {
    round_to(value.clamp(0.0, 1.0), SCORE_PLACES)
}

fn saturating_ratio(value: f64, saturation: f64) -> f64 {
    (value / saturation).min(1.0)
}

/// Flight-risk proxy built from engagement, burnout and a stalled promotion path.
///
/// `burnout` and `promotion_score` are the already-rounded values produced for the
/// same record, so the thresholds see exactly what the report shows.
pub fn attrition_risk(record: &EmployeeRecord, burnout: f64, promotion_score: f64) -> f64 {
    let mut risk = ATTRITION_BASE;

    let engagement = record.number(fields::ENGAGEMENT_SCORE, defaults::ENGAGEMENT_FOR_RISK);
    if engagement < ATTRITION_ENGAGEMENT_CUTOFF {
        risk += ATTRITION_LOW_ENGAGEMENT;
    }

    if burnout >= ATTRITION_BURNOUT_CUTOFF {
        risk += ATTRITION_HIGH_BURNOUT;
    }

    let tenure = record.number(fields::TENURE_YEARS, defaults::TENURE_YEARS);
    if promotion_score < ATTRITION_PROMOTION_CUTOFF && tenure > ATTRITION_TENURE_CUTOFF {
        risk += ATTRITION_STALLED_PROMOTION;
    }

    unit_score(risk)
}

pub fn promotion_score(record: &EmployeeRecord) -> f64 {
    let performance = record.number(
        fields::PERFORMANCE_RATING,
        defaults::PERFORMANCE_FOR_PROMOTION,
    );
    let overall = record.number(fields::AVG_OVERALL_SCORE, defaults::AVG_OVERALL_SCORE);
    let training = record.number(fields::TRAINING_COUNT, defaults::TRAINING_COUNT);
    let tenure = record.number(fields::TENURE_YEARS, defaults::TENURE_YEARS);

    let mut score = (performance / RATING_SCALE) * PROMOTION_PERFORMANCE_WEIGHT
        + (overall / RATING_SCALE) * PROMOTION_OVERALL_WEIGHT
        + saturating_ratio(training, TRAINING_SATURATION) * PROMOTION_TRAINING_WEIGHT
        + saturating_ratio(tenure, TENURE_SATURATION_YEARS) * PROMOTION_TENURE_WEIGHT;

    if !record.flag(fields::CAREER_STAGNATION_FLAG) {
        score += PROMOTION_NO_STAGNATION_BONUS;
    }

    unit_score(score)
}

/// Next-period rating on the 1..=5 scale, at one decimal.
pub fn predicted_performance(record: &EmployeeRecord) -> f64 {
    let current = record.number(fields::PERFORMANCE_RATING, defaults::PERFORMANCE);
    let overall = record.number(fields::AVG_OVERALL_SCORE, current);
    let drop = record.number(fields::PERFORMANCE_DROP_FLAG, defaults::FLAG);

    let predicted = current * PREDICTED_CURRENT_WEIGHT
        + overall * PREDICTED_OVERALL_WEIGHT
        + (current - drop) * PREDICTED_TREND_WEIGHT;

    round_to(
        predicted.clamp(PERFORMANCE_FLOOR, PERFORMANCE_CEILING),
        PERFORMANCE_PLACES,
    )
}

pub fn behavioral_risk(record: &EmployeeRecord) -> f64 {
    let burnout = record.number(fields::BURNOUT_RISK_SCORE, defaults::BURNOUT);
    let absence = record.number(fields::ABSENCE_DAYS, defaults::ABSENCE_DAYS);
    let high_absence = if record.truthy(fields::HIGH_ABSENCE_FLAG) {
        1.0
    } else {
        0.0
    };

    let risk = burnout * BEHAVIORAL_BURNOUT_WEIGHT
        + saturating_ratio(absence, ABSENCE_SATURATION_DAYS) * BEHAVIORAL_ABSENCE_WEIGHT
        + high_absence * BEHAVIORAL_FLAG_WEIGHT;

    unit_score(risk)
}

pub fn training_impact(record: &EmployeeRecord) -> f64 {
    if record.flag(fields::NO_TRAINING_FLAG) {
        return 0.0;
    }

    let count = record.number(fields::TRAINING_COUNT, defaults::TRAINING_COUNT);
    let days_since = record.number(
        fields::DAYS_SINCE_LAST_TRAINING,
        defaults::DAYS_SINCE_LAST_TRAINING,
    );

    let recency = (1.0 - days_since / TRAINING_RECENCY_HORIZON_DAYS).max(0.0);
    let volume = saturating_ratio(count, TRAINING_SATURATION);

    unit_score(recency * TRAINING_RECENCY_WEIGHT + volume * TRAINING_VOLUME_WEIGHT)
}
