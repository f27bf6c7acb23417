use super::record::{defaults, fields, EmployeeRecord};
use super::report::{summarize, EmployeePrediction, Report};
use super::scoring::{self, round_to, DepartmentSalaryMeans};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

const BURNOUT_PLACES: i32 = 3;
const ENGAGEMENT_PLACES: i32 = 2;

/// Builds the full prediction for one record. `pay_equity_gap` comes from the
/// table-wide pass and `prediction_date` is shared by the whole run.
pub fn assemble(
    record: &EmployeeRecord,
    pay_equity_gap: f64,
    prediction_date: DateTime<Utc>,
) -> EmployeePrediction {
    let promotion_score = scoring::promotion_score(record);
    let behavioral_risk = scoring::behavioral_risk(record);

    let burnout_score = round_to(
        record.number(fields::BURNOUT_RISK_SCORE, defaults::BURNOUT),
        BURNOUT_PLACES,
    );
    let absence_days = record.get::<i64>(fields::ABSENCE_DAYS, defaults::ABSENCE_DAYS as i64);

    let attrition_risk = scoring::attrition_risk(record, burnout_score, promotion_score);

    EmployeePrediction {
        employee_id: record.text(fields::EMPLOYEE_ID, defaults::UNKNOWN_LABEL),
        department: record.department(),
        job_title: record.text(fields::JOB_TITLE, defaults::UNKNOWN_LABEL),
        gender: record.text(fields::GENDER, defaults::UNKNOWN_LABEL),

        attrition_risk,
        attrition_level: scoring::attrition_level(attrition_risk),
        top_risk_factors: scoring::top_risk_factors(record),

        promotion_score,
        promotion_readiness: scoring::promotion_readiness(promotion_score),

        predicted_performance: scoring::predicted_performance(record),
        current_performance: record
            .get::<i64>(fields::PERFORMANCE_RATING, defaults::PERFORMANCE as i64),

        burnout_score,
        behavioral_risk_level: scoring::behavioral_risk_level(behavioral_risk),

        engagement_score: round_to(
            record.number(fields::ENGAGEMENT_SCORE, defaults::ENGAGEMENT),
            ENGAGEMENT_PLACES,
        ),

        absence_days,
        absence_risk: scoring::absence_risk(absence_days),

        pay_equity_gap,
        salary: record.number(fields::SALARY, defaults::SALARY),

        training_impact_score: scoring::training_impact(record),
        training_count: record
            .get::<i64>(fields::TRAINING_COUNT, defaults::TRAINING_COUNT as i64),

        recommendations: scoring::recommendations(record),
        alerts: scoring::alerts(record),

        prediction_date,
    }
}

/// Runs the batch: department salary means over the whole table, then every
/// record in input order, then the summary reduction.
pub fn generate_report(records: &[EmployeeRecord], generated_at: DateTime<Utc>) -> Report {
    let means = DepartmentSalaryMeans::from_records(records);
    debug!(departments = means.len(), "computed department salary means");

    let predictions: Vec<EmployeePrediction> = records
        .iter()
        .map(|record| assemble(record, means.gap(record), generated_at))
        .collect();

    let summary = summarize(&predictions);
    info!(
        employees = summary.total_employees,
        departments = summary.department_metrics.len(),
        "generated prediction report"
    );

    Report {
        generated_at,
        summary,
        predictions,
    }
}
