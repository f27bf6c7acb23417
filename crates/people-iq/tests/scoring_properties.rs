use chrono::{TimeZone, Utc};
use people_iq::analytics::scoring::{self, narrative};
use people_iq::analytics::{assemble, generate_report, EmployeeRecord};
use proptest::prelude::*;

const NUMERIC_FIELDS: [&str; 10] = [
    "EngagementScore",
    "BurnoutRiskScore",
    "TenureYears",
    "PerformanceRating",
    "AvgOverallScore",
    "TrainingCount",
    "DaysSinceLastTraining",
    "AbsenceDays_Last6M",
    "Salary",
    "HighAbsenceFlag",
];

const FLAG_FIELDS: [&str; 4] = [
    "NoTrainingFlag",
    "PerformanceDropFlag",
    "CareerStagnationFlag",
    "PayStagnationFlag",
];

fn numeric_cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        (-50.0f64..500.0).prop_map(|value| Some(value.to_string())),
        (0i64..10).prop_map(|value| Some(value.to_string())),
        Just(Some("n/a".to_string())),
    ]
}

fn flag_cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), Just(Some("0".to_string())), Just(Some("1".to_string()))]
}

fn department() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Engineering".to_string())),
        Just(Some("Sales".to_string())),
        Just(Some("HR".to_string())),
    ]
}

prop_compose! {
    fn record_fields()(
        numbers in proptest::collection::vec(numeric_cell(), NUMERIC_FIELDS.len()),
        flags in proptest::collection::vec(flag_cell(), FLAG_FIELDS.len()),
        department in department(),
    ) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(department) = department {
            pairs.push(("Department".to_string(), department));
        }
        let cells = NUMERIC_FIELDS.iter().zip(numbers).chain(FLAG_FIELDS.iter().zip(flags));
        for (field, value) in cells {
            if let Some(value) = value {
                pairs.push((field.to_string(), value));
            }
        }
        pairs
    }
}

fn with_id(mut pairs: Vec<(String, String)>, index: usize) -> EmployeeRecord {
    pairs.push(("EmployeeID".to_string(), format!("E{index}")));
    EmployeeRecord::from_pairs(pairs)
}

fn employee_record() -> impl Strategy<Value = EmployeeRecord> {
    record_fields().prop_map(|pairs| with_id(pairs, 1))
}

fn employee_table() -> impl Strategy<Value = Vec<EmployeeRecord>> {
    proptest::collection::vec(record_fields(), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, pairs)| with_id(pairs, index))
            .collect()
    })
}

/// Counts the recommendation rules a record triggers, reading fields with the
/// same defaults the rules use.
fn matched_recommendation_rules(record: &EmployeeRecord) -> usize {
    let rules = [
        record.number("BurnoutRiskScore", 0.0) >= 0.5,
        record.number("EngagementScore", 0.0) < 1.0,
        record.flag("PayStagnationFlag"),
        record.flag("CareerStagnationFlag"),
        record.flag("NoTrainingFlag"),
        record.flag("PerformanceDropFlag"),
        record.flag("HighAbsenceFlag"),
        record.number("PerformanceRating", 3.0) >= 4.0,
    ];
    rules.iter().filter(|hit| **hit).count()
}

fn in_unit_range(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

proptest! {
    #[test]
    fn bounded_scores_stay_in_range(record in employee_record()) {
        let date = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let prediction = assemble(&record, 0.0, date);

        prop_assert!(in_unit_range(prediction.attrition_risk));
        prop_assert!(in_unit_range(prediction.promotion_score));
        prop_assert!(in_unit_range(prediction.training_impact_score));
        prop_assert!(in_unit_range(scoring::behavioral_risk(&record)));
        prop_assert!((1.0..=5.0).contains(&prediction.predicted_performance));
    }

    #[test]
    fn narrative_lists_respect_their_contracts(record in employee_record()) {
        let factors = scoring::top_risk_factors(&record);
        prop_assert!(!factors.is_empty());

        let recommendations = scoring::recommendations(&record);
        prop_assert!(!recommendations.is_empty());
        let matched = matched_recommendation_rules(&record);
        if matched == 0 {
            prop_assert_eq!(recommendations, vec![narrative::DEFAULT_RECOMMENDATION.to_string()]);
        } else {
            prop_assert_eq!(recommendations.len(), matched.min(narrative::MAX_RECOMMENDATIONS));
        }

        let alerts = scoring::alerts(&record);
        prop_assert!(alerts.len() <= 5);
    }

    #[test]
    fn no_training_flag_zeroes_training_impact(record in employee_record()) {
        let mut pairs: Vec<(String, String)> = ["TrainingCount", "DaysSinceLastTraining"]
            .iter()
            .filter_map(|field| record.raw(field).map(|v| (field.to_string(), v.to_string())))
            .collect();
        pairs.push(("NoTrainingFlag".to_string(), "1".to_string()));
        let flagged = EmployeeRecord::from_pairs(pairs);

        prop_assert_eq!(scoring::training_impact(&flagged), 0.0);
    }

    #[test]
    fn department_counts_cover_every_employee(records in employee_table()) {
        let date = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let report = generate_report(&records, date);

        let counted: usize = report
            .summary
            .department_metrics
            .iter()
            .map(|department| department.count)
            .sum();
        prop_assert_eq!(counted, report.summary.total_employees);
        prop_assert_eq!(report.predictions.len(), records.len());
        prop_assert!(report.predictions.iter().all(|p| p.prediction_date == date));
    }
}
