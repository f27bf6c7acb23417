use super::views::{DepartmentMetrics, DepartmentSummary, EmployeePrediction, ReportSummary};
use crate::analytics::domain::PromotionReadiness;
use crate::analytics::scoring::round_to;
use std::collections::HashMap;

const ENGAGEMENT_PLACES: i32 = 2;
const BURNOUT_PLACES: i32 = 3;
const PROMOTION_PLACES: i32 = 3;
const SALARY_PLACES: i32 = 0;

#[derive(Debug, Default, Clone)]
struct DepartmentTotals {
    count: usize,
    engagement_sum: f64,
    burnout_sum: f64,
    salary_sum: f64,
    promotion_ready: usize,
}

impl DepartmentTotals {
    fn add(&mut self, prediction: &EmployeePrediction) {
        self.count += 1;
        self.engagement_sum += prediction.engagement_score;
        self.burnout_sum += prediction.burnout_score;
        self.salary_sum += prediction.salary;
        if prediction.promotion_readiness == PromotionReadiness::Ready {
            self.promotion_ready += 1;
        }
    }

    fn finish(self, name: String) -> DepartmentSummary {
        DepartmentSummary {
            name,
            count: self.count,
            avg_engagement: average(self.engagement_sum, self.count, ENGAGEMENT_PLACES),
            avg_burnout: average(self.burnout_sum, self.count, BURNOUT_PLACES),
            avg_salary: average(self.salary_sum, self.count, SALARY_PLACES),
            promotion_ready: self.promotion_ready,
        }
    }
}

pub(crate) fn average(sum: f64, count: usize, places: i32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round_to(sum / count as f64, places)
}

/// Groups predictions by department, in order of first appearance.
pub fn department_metrics(predictions: &[EmployeePrediction]) -> DepartmentMetrics {
    let mut order: Vec<(String, DepartmentTotals)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for prediction in predictions {
        let slot = match index.get(prediction.department.as_str()) {
            Some(slot) => *slot,
            None => {
                order.push((prediction.department.clone(), DepartmentTotals::default()));
                index.insert(prediction.department.as_str(), order.len() - 1);
                order.len() - 1
            }
        };
        order[slot].1.add(prediction);
    }

    DepartmentMetrics(
        order
            .into_iter()
            .map(|(name, totals)| totals.finish(name))
            .collect(),
    )
}

/// Global averages over the full set plus the per-department breakdown.
pub fn summarize(predictions: &[EmployeePrediction]) -> ReportSummary {
    let total = predictions.len();
    let engagement: f64 = predictions.iter().map(|p| p.engagement_score).sum();
    let burnout: f64 = predictions.iter().map(|p| p.burnout_score).sum();
    let promotion: f64 = predictions.iter().map(|p| p.promotion_score).sum();

    ReportSummary {
        total_employees: total,
        avg_engagement: average(engagement, total, ENGAGEMENT_PLACES),
        avg_burnout_score: average(burnout, total, BURNOUT_PLACES),
        avg_promotion_readiness: average(promotion, total, PROMOTION_PLACES),
        department_metrics: department_metrics(predictions),
    }
}
