use crate::analytics::domain::{
    AbsenceRisk, AttritionLevel, BehavioralRiskLevel, PromotionReadiness,
};
use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Derived scores, labels and guidance for a single employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeePrediction {
    #[serde(rename = "EmployeeID")]
    pub employee_id: String,
    pub department: String,
    pub job_title: String,
    pub gender: String,

    pub attrition_risk: f64,
    #[serde(rename = "AttritionRiskLevel")]
    pub attrition_level: AttritionLevel,
    pub top_risk_factors: Vec<String>,

    pub promotion_score: f64,
    pub promotion_readiness: PromotionReadiness,

    pub predicted_performance: f64,
    pub current_performance: i64,

    pub burnout_score: f64,
    pub behavioral_risk_level: BehavioralRiskLevel,

    pub engagement_score: f64,

    pub absence_days: i64,
    pub absence_risk: AbsenceRisk,

    pub pay_equity_gap: f64,
    pub salary: f64,

    pub training_impact_score: f64,
    pub training_count: i64,

    pub recommendations: Vec<String>,
    pub alerts: Vec<String>,

    pub prediction_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    #[serde(skip)]
    pub name: String,
    pub count: usize,
    pub avg_engagement: f64,
    pub avg_burnout: f64,
    pub avg_salary: f64,
    pub promotion_ready: usize,
}

/// Department summaries keyed by name, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentMetrics(pub Vec<DepartmentSummary>);

impl DepartmentMetrics {
    pub fn get(&self, name: &str) -> Option<&DepartmentSummary> {
        self.0.iter().find(|summary| summary.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DepartmentSummary> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|summary| summary.name.as_str()).collect()
    }
}

impl Serialize for DepartmentMetrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for summary in &self.0 {
            map.serialize_entry(&summary.name, summary)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_employees: usize,
    pub avg_engagement: f64,
    pub avg_burnout_score: f64,
    pub avg_promotion_readiness: f64,
    pub department_metrics: DepartmentMetrics,
}

/// Output of one pipeline run. Every prediction shares `generated_at` as its
/// prediction date and appears in input row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub predictions: Vec<EmployeePrediction>,
}

impl Report {
    pub fn find(&self, employee_id: &str) -> Option<&EmployeePrediction> {
        self.predictions
            .iter()
            .find(|prediction| prediction.employee_id == employee_id)
    }
}
