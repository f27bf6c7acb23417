use chrono::{TimeZone, Utc};
use people_iq::analytics::scoring::narrative::{DEFAULT_RECOMMENDATION, NO_RISK_FACTORS};
use people_iq::analytics::{
    generate_report, AbsenceRisk, AttritionLevel, EmployeeTableLoader, IngestError,
    PromotionReadiness, Report,
};
use std::io::Cursor;

const FEATURES: &str = "\
EmployeeID,Department,JobTitle,Gender,EngagementScore,BurnoutRiskScore,TenureYears,PerformanceRating,AvgOverallScore,TrainingCount,DaysSinceLastTraining,NoTrainingFlag,PerformanceDropFlag,CareerStagnationFlag,PayStagnationFlag,AbsenceDays_Last6M,HighAbsenceFlag,Salary
E1,Engineering,Engineer,Female,1,0.8,5,0,0,0,0,1,0,1,1,16,1,90000
E2,Engineering,Engineer,Male,4,0.2,2,4,4,6,30,0,0,0,0,2,0,110000
E3,Sales,Account Executive,Female,3,0.1,1,3,3,2,100,0,0,0,0,9,0,60000
E4,,Contractor,,,,,,,,,,,,,,,
";

fn report_from(csv: &str) -> Report {
    let table = EmployeeTableLoader::from_reader(Cursor::new(csv)).expect("table loads");
    let generated_at = Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap();
    generate_report(&table.records, generated_at)
}

#[test]
fn scores_every_row_in_input_order() {
    let report = report_from(FEATURES);
    let ids: Vec<&str> = report
        .predictions
        .iter()
        .map(|p| p.employee_id.as_str())
        .collect();
    assert_eq!(ids, vec!["E1", "E2", "E3", "E4"]);
    assert_eq!(report.summary.total_employees, 4);
}

#[test]
fn high_risk_employee_matches_worked_example() {
    let report = report_from(FEATURES);
    let e1 = report.find("E1").expect("E1 scored");

    assert_eq!(e1.attrition_risk, 0.9);
    assert_eq!(e1.attrition_level, AttritionLevel::High);
    assert_eq!(e1.training_impact_score, 0.0);
    assert_eq!(e1.absence_days, 16);
    assert_eq!(e1.absence_risk, AbsenceRisk::High);
    assert_eq!(
        e1.top_risk_factors,
        vec![
            "High Burnout",
            "Low Engagement",
            "Pay Stagnation",
            "Career Stagnation"
        ]
    );
    assert_eq!(e1.recommendations.len(), 5);
    assert_eq!(e1.alerts.len(), 4);
}

#[test]
fn quiet_employee_gets_default_text() {
    let report = report_from(FEATURES);
    let e3 = report.find("E3").expect("E3 scored");

    assert_eq!(e3.top_risk_factors, vec![NO_RISK_FACTORS]);
    assert_eq!(e3.recommendations, vec![DEFAULT_RECOMMENDATION]);
    assert!(e3.alerts.is_empty());
    assert_eq!(e3.promotion_readiness, PromotionReadiness::Developing);
}

#[test]
fn sparse_row_falls_back_to_defaults() {
    let report = report_from(FEATURES);
    let e4 = report.find("E4").expect("E4 scored");

    assert_eq!(e4.department, "Unknown");
    assert_eq!(e4.gender, "Unknown");
    assert_eq!(e4.job_title, "Contractor");
    assert_eq!(e4.salary, 0.0);
    assert_eq!(e4.pay_equity_gap, 0.0);
    assert_eq!(e4.current_performance, 3);
}

#[test]
fn department_metrics_follow_first_appearance() {
    let report = report_from(FEATURES);
    let metrics = &report.summary.department_metrics;

    assert_eq!(metrics.names(), vec!["Engineering", "Sales", "Unknown"]);
    let engineering = metrics.get("Engineering").expect("engineering metrics");
    assert_eq!(engineering.count, 2);
    assert_eq!(engineering.avg_salary, 100000.0);
    assert_eq!(engineering.avg_engagement, 2.5);
    assert_eq!(engineering.promotion_ready, 1);

    let e1 = report.find("E1").expect("E1 scored");
    let e2 = report.find("E2").expect("E2 scored");
    assert_eq!(e1.pay_equity_gap, -0.1);
    assert_eq!(e2.pay_equity_gap, 0.1);
}

#[test]
fn serialized_report_uses_published_field_names() {
    let report = report_from(FEATURES);
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["generatedAt"], "2025-02-03T04:05:06Z");
    assert_eq!(json["summary"]["totalEmployees"], 4);
    assert_eq!(
        json["summary"]["departmentMetrics"]["Engineering"]["count"],
        2
    );

    let first = &json["predictions"][0];
    assert_eq!(first["EmployeeID"], "E1");
    assert_eq!(first["AttritionRiskLevel"], "High");
    assert_eq!(first["PromotionReadiness"], "Not Ready");
    assert_eq!(first["PredictionDate"], json["generatedAt"]);
}

#[test]
fn empty_table_yields_zero_summary() {
    let report = report_from("EmployeeID,Department,Salary\n");
    assert_eq!(report.summary.total_employees, 0);
    assert_eq!(report.summary.avg_engagement, 0.0);
    assert!(report.summary.department_metrics.is_empty());
    assert!(report.predictions.is_empty());
}

#[test]
fn blank_identifier_aborts_the_run() {
    let csv = "EmployeeID,Department\nE1,Ops\n,Ops\n";
    let result = EmployeeTableLoader::from_reader(Cursor::new(csv));
    assert!(matches!(
        result,
        Err(IngestError::MissingIdentifier { row: 2, .. })
    ));
}
