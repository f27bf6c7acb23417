use crate::analytics::record::{defaults, fields, EmployeeRecord};

pub const NO_RISK_FACTORS: &str = "No significant risk factors";
pub const DEFAULT_RECOMMENDATION: &str = "Continue current engagement strategies";
pub const MAX_RECOMMENDATIONS: usize = 5;

pub const FACTOR_HIGH_BURNOUT: &str = "High Burnout";
pub const FACTOR_LOW_ENGAGEMENT: &str = "Low Engagement";
pub const FACTOR_PAY_STAGNATION: &str = "Pay Stagnation";
pub const FACTOR_CAREER_STAGNATION: &str = "Career Stagnation";

pub const REC_WORKLOAD: &str = "Assess workload and consider redistribution";
pub const REC_ENGAGEMENT: &str = "Implement engagement improvement plan";
pub const REC_COMPENSATION: &str = "Review compensation and consider salary adjustment";
pub const REC_CAREER: &str = "Discuss career development path and growth opportunities";
pub const REC_TRAINING: &str = "Enroll in relevant training or upskilling program";
pub const REC_PERFORMANCE_PLAN: &str = "Set up performance improvement plan with clear milestones";
pub const REC_ATTENDANCE: &str = "Review attendance patterns and discuss work-life balance";
pub const REC_RECOGNITION: &str = "Recognize high performance and discuss promotion timeline";

pub const ALERT_BURNOUT: &str = "Burnout risk above critical threshold";
pub const ALERT_NO_TRAINING: &str = "No training completed in 6+ months";
pub const ALERT_PERFORMANCE_DROP: &str = "Performance has declined from previous period";
pub const ALERT_ABSENCES: &str = "Excessive absences in last 6 months";
pub const ALERT_DOUBLE_STAGNATION: &str = "Both pay and career stagnation detected";

const FACTOR_BURNOUT_CUTOFF: f64 = 0.6;
const FACTOR_ENGAGEMENT_CUTOFF: f64 = 2.5;
const REC_BURNOUT_CUTOFF: f64 = 0.5;
const REC_ENGAGEMENT_CUTOFF: f64 = 1.0;
const REC_HIGH_PERFORMANCE: f64 = 4.0;
const ALERT_BURNOUT_CUTOFF: f64 = 0.7;
const ALERT_ABSENCE_DAYS: f64 = 15.0;

fn matched<'a>(rules: &'a [(bool, &'static str)]) -> impl Iterator<Item = String> + 'a {
    rules
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, text)| text.to_string())
}

/// Risk labels in fixed order; never empty.
pub fn top_risk_factors(record: &EmployeeRecord) -> Vec<String> {
    let burnout = record.number(fields::BURNOUT_RISK_SCORE, defaults::BURNOUT);
    let engagement = record.number(fields::ENGAGEMENT_SCORE, defaults::ENGAGEMENT_FOR_RISK);

    let rules = [
        (burnout > FACTOR_BURNOUT_CUTOFF, FACTOR_HIGH_BURNOUT),
        (engagement < FACTOR_ENGAGEMENT_CUTOFF, FACTOR_LOW_ENGAGEMENT),
        (record.flag(fields::PAY_STAGNATION_FLAG), FACTOR_PAY_STAGNATION),
        (record.flag(fields::CAREER_STAGNATION_FLAG), FACTOR_CAREER_STAGNATION),
    ];

    let factors: Vec<String> = matched(&rules).collect();
    if factors.is_empty() {
        vec![NO_RISK_FACTORS.to_string()]
    } else {
        factors
    }
}

/// Up to five actions in priority order; never empty.
pub fn recommendations(record: &EmployeeRecord) -> Vec<String> {
    let burnout = record.number(fields::BURNOUT_RISK_SCORE, defaults::BURNOUT);
    let engagement = record.number(fields::ENGAGEMENT_SCORE, defaults::ENGAGEMENT);
    let performance = record.number(fields::PERFORMANCE_RATING, defaults::PERFORMANCE);

    let rules = [
        (burnout >= REC_BURNOUT_CUTOFF, REC_WORKLOAD),
        (engagement < REC_ENGAGEMENT_CUTOFF, REC_ENGAGEMENT),
        (record.flag(fields::PAY_STAGNATION_FLAG), REC_COMPENSATION),
        (record.flag(fields::CAREER_STAGNATION_FLAG), REC_CAREER),
        (record.flag(fields::NO_TRAINING_FLAG), REC_TRAINING),
        (record.flag(fields::PERFORMANCE_DROP_FLAG), REC_PERFORMANCE_PLAN),
        (record.flag(fields::HIGH_ABSENCE_FLAG), REC_ATTENDANCE),
        (performance >= REC_HIGH_PERFORMANCE, REC_RECOGNITION),
    ];

    let actions: Vec<String> = matched(&rules).take(MAX_RECOMMENDATIONS).collect();
    if actions.is_empty() {
        vec![DEFAULT_RECOMMENDATION.to_string()]
    } else {
        actions
    }
}

/// Attention flags; an empty list means nothing needs escalation.
pub fn alerts(record: &EmployeeRecord) -> Vec<String> {
    let burnout = record.number(fields::BURNOUT_RISK_SCORE, defaults::BURNOUT);
    let absence = record.number(fields::ABSENCE_DAYS, defaults::ABSENCE_DAYS);
    let double_stagnation = record.flag(fields::PAY_STAGNATION_FLAG)
        && record.flag(fields::CAREER_STAGNATION_FLAG);

    let rules = [
        (burnout >= ALERT_BURNOUT_CUTOFF, ALERT_BURNOUT),
        (record.flag(fields::NO_TRAINING_FLAG), ALERT_NO_TRAINING),
        (record.flag(fields::PERFORMANCE_DROP_FLAG), ALERT_PERFORMANCE_DROP),
        (absence >= ALERT_ABSENCE_DAYS, ALERT_ABSENCES),
        (double_stagnation, ALERT_DOUBLE_STAGNATION),
    ];

    matched(&rules).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> EmployeeRecord {
        EmployeeRecord::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn risk_factors_fall_back_to_placeholder() {
        assert_eq!(top_risk_factors(&record(&[])), vec![NO_RISK_FACTORS]);
    }

    #[test]
    fn risk_factors_follow_fixed_order() {
        let employee = record(&[
            ("CareerStagnationFlag", "1"),
            ("BurnoutRiskScore", "0.61"),
            ("EngagementScore", "2.4"),
            ("PayStagnationFlag", "1"),
        ]);
        assert_eq!(
            top_risk_factors(&employee),
            vec![
                FACTOR_HIGH_BURNOUT,
                FACTOR_LOW_ENGAGEMENT,
                FACTOR_PAY_STAGNATION,
                FACTOR_CAREER_STAGNATION
            ]
        );
    }

    #[test]
    fn risk_factor_burnout_cutoff_is_strict() {
        let employee = record(&[("BurnoutRiskScore", "0.6")]);
        assert_eq!(top_risk_factors(&employee), vec![NO_RISK_FACTORS]);
    }

    #[test]
    fn recommendations_default_when_nothing_matches() {
        let employee = record(&[("EngagementScore", "3"), ("PerformanceRating", "3")]);
        assert_eq!(recommendations(&employee), vec![DEFAULT_RECOMMENDATION]);
    }

    #[test]
    fn recommendations_treat_missing_engagement_as_zero() {
        assert_eq!(recommendations(&record(&[])), vec![REC_ENGAGEMENT]);
    }

    #[test]
    fn recommendations_truncate_to_first_five_matches() {
        let employee = record(&[
            ("BurnoutRiskScore", "0.9"),
            ("EngagementScore", "0.5"),
            ("PayStagnationFlag", "1"),
            ("CareerStagnationFlag", "1"),
            ("NoTrainingFlag", "1"),
            ("PerformanceDropFlag", "1"),
            ("HighAbsenceFlag", "1"),
            ("PerformanceRating", "5"),
        ]);
        assert_eq!(
            recommendations(&employee),
            vec![
                REC_WORKLOAD,
                REC_ENGAGEMENT,
                REC_COMPENSATION,
                REC_CAREER,
                REC_TRAINING
            ]
        );
    }

    #[test]
    fn recommendations_keep_priority_order() {
        let employee = record(&[
            ("EngagementScore", "4"),
            ("HighAbsenceFlag", "1"),
            ("PerformanceRating", "4"),
            ("PerformanceDropFlag", "1"),
        ]);
        assert_eq!(
            recommendations(&employee),
            vec![REC_PERFORMANCE_PLAN, REC_ATTENDANCE, REC_RECOGNITION]
        );
    }

    #[test]
    fn alerts_may_be_empty() {
        assert!(alerts(&record(&[])).is_empty());
    }

    #[test]
    fn alerts_require_both_stagnation_flags() {
        let pay_only = record(&[("PayStagnationFlag", "1")]);
        assert!(alerts(&pay_only).is_empty());

        let employee = record(&[
            ("BurnoutRiskScore", "0.7"),
            ("AbsenceDays_Last6M", "15"),
            ("PayStagnationFlag", "1"),
            ("CareerStagnationFlag", "1"),
        ]);
        assert_eq!(
            alerts(&employee),
            vec![ALERT_BURNOUT, ALERT_ABSENCES, ALERT_DOUBLE_STAGNATION]
        );
    }
}
