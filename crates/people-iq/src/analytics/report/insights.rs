use super::summary::average;
use super::views::{EmployeePrediction, Report};
use crate::analytics::domain::{AbsenceRisk, AttritionLevel, PromotionReadiness};
use crate::analytics::scoring::narrative::NO_RISK_FACTORS;
use crate::analytics::scoring::round_to;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

const TOP_FACTOR_LIMIT: usize = 8;
const HIGH_RISK_LIMIT: usize = 50;
const TOP_PERFORMER_LIMIT: usize = 10;
const HIGH_ABSENCE_LIMIT: usize = 30;
const ACTIONABLE_LIMIT: usize = 50;
const ALERT_FEED_LIMIT: usize = 100;
const DEPARTMENT_LIMIT: usize = 500;
const DEFAULT_PAGE_SIZE: usize = 50;
const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelDistribution {
    #[serde(rename = "High")]
    pub high: usize,
    #[serde(rename = "Medium")]
    pub medium: usize,
    #[serde(rename = "Low")]
    pub low: usize,
}

impl LevelDistribution {
    fn attrition(predictions: &[EmployeePrediction]) -> Self {
        let mut distribution = Self::default();
        for prediction in predictions {
            match prediction.attrition_level {
                AttritionLevel::High => distribution.high += 1,
                AttritionLevel::Medium => distribution.medium += 1,
                AttritionLevel::Low => distribution.low += 1,
            }
        }
        distribution
    }

    fn absence(predictions: &[EmployeePrediction]) -> Self {
        let mut distribution = Self::default();
        for prediction in predictions {
            match prediction.absence_risk {
                AbsenceRisk::High => distribution.high += 1,
                AbsenceRisk::Medium => distribution.medium += 1,
                AbsenceRisk::Low => distribution.low += 1,
            }
        }
        distribution
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorWeight {
    pub factor: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorCount {
    pub factor: String,
    pub count: usize,
}

/// Headline trend figures for dashboards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSnapshot {
    pub total_employees: usize,
    pub avg_attrition_risk: f64,
    pub avg_engagement: f64,
    pub avg_burnout_score: f64,
    pub avg_promotion_readiness: f64,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,
    pub turnover_rate: f64,
    pub absenteeism_rate: f64,
    pub top_turnover_factors: Vec<FactorWeight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRisk {
    pub name: String,
    pub count: usize,
    pub avg_risk: f64,
    pub high_risk_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoverBreakdown<'a> {
    pub distribution: LevelDistribution,
    pub departments: Vec<DepartmentRisk>,
    pub top_factors: Vec<FactorCount>,
    pub high_risk_employees: Vec<&'a EmployeePrediction>,
    pub total_employees: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPerformance {
    pub name: String,
    pub count: usize,
    pub avg_performance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceBreakdown<'a> {
    pub rating_distribution: BTreeMap<i64, usize>,
    pub promotion_breakdown: BTreeMap<&'static str, usize>,
    pub departments: Vec<DepartmentPerformance>,
    pub top_performers: Vec<&'a EmployeePrediction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentAbsence {
    pub name: String,
    pub count: usize,
    pub avg_absence_days: f64,
    pub high_risk_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenteeismBreakdown<'a> {
    pub distribution: LevelDistribution,
    pub departments: Vec<DepartmentAbsence>,
    pub high_absence_employees: Vec<&'a EmployeePrediction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayEquityGroup {
    pub department: String,
    pub gender: String,
    pub count: usize,
    pub avg_salary: f64,
    pub avg_gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingGroup {
    pub department: String,
    pub trained_count: usize,
    pub untrained_count: usize,
    pub avg_impact: f64,
    pub avg_eng_trained: f64,
    pub avg_eng_untrained: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBreakdown<'a> {
    pub pay_equity: Vec<PayEquityGroup>,
    pub training: Vec<TrainingGroup>,
    pub actionable_employees: Vec<&'a EmployeePrediction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionFilter {
    pub risk: Option<AttritionLevel>,
    pub department: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionPage<'a> {
    pub data: Vec<&'a EmployeePrediction>,
    pub pagination: Pagination,
}

/// Groups predictions by `key`, keeping first-appearance order.
fn group_by<'a, K, F>(
    predictions: &'a [EmployeePrediction],
    key: F,
) -> Vec<(K, Vec<&'a EmployeePrediction>)>
where
    K: Eq + std::hash::Hash + Clone,
    F: Fn(&EmployeePrediction) -> K,
{
    let mut groups: Vec<(K, Vec<&EmployeePrediction>)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for prediction in predictions {
        let group_key = key(prediction);
        match index.get(&group_key) {
            Some(slot) => groups[*slot].1.push(prediction),
            None => {
                index.insert(group_key.clone(), groups.len());
                groups.push((group_key, vec![prediction]));
            }
        }
    }

    groups
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

fn top_by<'a, F>(
    predictions: impl Iterator<Item = &'a EmployeePrediction>,
    metric: F,
    limit: usize,
) -> Vec<&'a EmployeePrediction>
where
    F: Fn(&EmployeePrediction) -> f64,
{
    let mut selected: Vec<&EmployeePrediction> = predictions.collect();
    selected.sort_by(|a, b| descending(metric(a), metric(b)));
    selected.truncate(limit);
    selected
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(part as f64 / total as f64 * 100.0, 1)
}

/// Risk factor occurrences, most frequent first, excluding the placeholder.
fn factor_counts(predictions: &[EmployeePrediction]) -> Vec<FactorCount> {
    let mut counts: Vec<FactorCount> = Vec::new();
    for factor in predictions
        .iter()
        .flat_map(|prediction| prediction.top_risk_factors.iter())
        .filter(|factor| factor.as_str() != NO_RISK_FACTORS)
    {
        match counts.iter_mut().find(|entry| &entry.factor == factor) {
            Some(entry) => entry.count += 1,
            None => counts.push(FactorCount {
                factor: factor.clone(),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_FACTOR_LIMIT);
    counts
}

pub fn trend_snapshot(report: &Report) -> TrendSnapshot {
    let predictions = &report.predictions;
    let total = predictions.len();
    let distribution = LevelDistribution::attrition(predictions);
    let risk_sum: f64 = predictions.iter().map(|p| p.attrition_risk).sum();
    let high_absence = predictions
        .iter()
        .filter(|p| p.absence_risk == AbsenceRisk::High)
        .count();

    let top_turnover_factors = factor_counts(predictions)
        .into_iter()
        .map(|entry| FactorWeight {
            weight: average(entry.count as f64, total, 3),
            factor: entry.factor,
        })
        .collect();

    TrendSnapshot {
        total_employees: total,
        avg_attrition_risk: average(risk_sum, total, 3),
        avg_engagement: report.summary.avg_engagement,
        avg_burnout_score: report.summary.avg_burnout_score,
        avg_promotion_readiness: report.summary.avg_promotion_readiness,
        high_risk_count: distribution.high,
        medium_risk_count: distribution.medium,
        low_risk_count: distribution.low,
        turnover_rate: percentage(distribution.high, total),
        absenteeism_rate: percentage(high_absence, total),
        top_turnover_factors,
    }
}

pub fn turnover_breakdown(report: &Report) -> TurnoverBreakdown<'_> {
    let predictions = &report.predictions;

    let departments = group_by(predictions, |p| p.department.clone())
        .into_iter()
        .map(|(name, members)| {
            let risk_sum: f64 = members.iter().map(|p| p.attrition_risk).sum();
            DepartmentRisk {
                count: members.len(),
                avg_risk: average(risk_sum, members.len(), 3),
                high_risk_count: members
                    .iter()
                    .filter(|p| p.attrition_level == AttritionLevel::High)
                    .count(),
                name,
            }
        })
        .collect();

    let high_risk_employees = top_by(
        predictions
            .iter()
            .filter(|p| p.attrition_level == AttritionLevel::High),
        |p| p.attrition_risk,
        HIGH_RISK_LIMIT,
    );

    TurnoverBreakdown {
        distribution: LevelDistribution::attrition(predictions),
        departments,
        top_factors: factor_counts(predictions),
        high_risk_employees,
        total_employees: predictions.len(),
    }
}

pub fn performance_breakdown(report: &Report) -> PerformanceBreakdown<'_> {
    let predictions = &report.predictions;

    let mut rating_distribution = BTreeMap::new();
    for prediction in predictions {
        *rating_distribution
            .entry(prediction.current_performance)
            .or_insert(0) += 1;
    }

    let mut promotion_breakdown = BTreeMap::new();
    for readiness in PromotionReadiness::ordered() {
        let count = predictions
            .iter()
            .filter(|p| p.promotion_readiness == readiness)
            .count();
        if count > 0 {
            promotion_breakdown.insert(readiness.label(), count);
        }
    }

    let mut departments: Vec<DepartmentPerformance> =
        group_by(predictions, |p| p.department.clone())
            .into_iter()
            .map(|(name, members)| {
                let sum: f64 = members.iter().map(|p| p.current_performance as f64).sum();
                DepartmentPerformance {
                    count: members.len(),
                    avg_performance: average(sum, members.len(), 2),
                    name,
                }
            })
            .collect();
    departments.sort_by(|a, b| descending(a.avg_performance, b.avg_performance));

    PerformanceBreakdown {
        rating_distribution,
        promotion_breakdown,
        departments,
        top_performers: top_by(
            predictions.iter(),
            |p| p.current_performance as f64,
            TOP_PERFORMER_LIMIT,
        ),
    }
}

pub fn absenteeism_breakdown(report: &Report) -> AbsenteeismBreakdown<'_> {
    let predictions = &report.predictions;

    let departments = group_by(predictions, |p| p.department.clone())
        .into_iter()
        .map(|(name, members)| {
            let days: f64 = members.iter().map(|p| p.absence_days as f64).sum();
            DepartmentAbsence {
                count: members.len(),
                avg_absence_days: average(days, members.len(), 1),
                high_risk_count: members
                    .iter()
                    .filter(|p| p.absence_risk == AbsenceRisk::High)
                    .count(),
                name,
            }
        })
        .collect();

    AbsenteeismBreakdown {
        distribution: LevelDistribution::absence(predictions),
        departments,
        high_absence_employees: top_by(
            predictions
                .iter()
                .filter(|p| p.absence_risk == AbsenceRisk::High),
            |p| p.absence_days as f64,
            HIGH_ABSENCE_LIMIT,
        ),
    }
}

pub fn recommendation_breakdown(report: &Report) -> RecommendationBreakdown<'_> {
    let predictions = &report.predictions;

    let pay_equity = group_by(predictions, |p| (p.department.clone(), p.gender.clone()))
        .into_iter()
        .map(|((department, gender), members)| {
            let salary: f64 = members.iter().map(|p| p.salary).sum();
            let gap: f64 = members.iter().map(|p| p.pay_equity_gap).sum();
            PayEquityGroup {
                department,
                gender,
                count: members.len(),
                avg_salary: average(salary, members.len(), 0),
                avg_gap: average(gap, members.len(), 3),
            }
        })
        .collect();

    let training = group_by(predictions, |p| p.department.clone())
        .into_iter()
        .map(|(department, members)| {
            let (trained, untrained): (Vec<_>, Vec<_>) =
                members.into_iter().partition(|p| p.training_count > 0);
            let impact: f64 = trained.iter().map(|p| p.training_impact_score).sum();
            let eng_trained: f64 = trained.iter().map(|p| p.engagement_score).sum();
            let eng_untrained: f64 = untrained.iter().map(|p| p.engagement_score).sum();
            TrainingGroup {
                department,
                trained_count: trained.len(),
                untrained_count: untrained.len(),
                avg_impact: average(impact, trained.len(), 3),
                avg_eng_trained: average(eng_trained, trained.len(), 2),
                avg_eng_untrained: average(eng_untrained, untrained.len(), 2),
            }
        })
        .collect();

    let actionable_employees = top_by(
        predictions.iter().filter(|p| {
            matches!(
                p.attrition_level,
                AttritionLevel::High | AttritionLevel::Medium
            )
        }),
        |p| p.attrition_risk,
        ACTIONABLE_LIMIT,
    );

    RecommendationBreakdown {
        pay_equity,
        training,
        actionable_employees,
    }
}

pub fn alert_feed(report: &Report) -> Vec<&EmployeePrediction> {
    report
        .predictions
        .iter()
        .filter(|p| !p.alerts.is_empty())
        .take(ALERT_FEED_LIMIT)
        .collect()
}

pub fn department_predictions<'a>(
    report: &'a Report,
    department: &str,
) -> Vec<&'a EmployeePrediction> {
    report
        .predictions
        .iter()
        .filter(|p| p.department == department)
        .take(DEPARTMENT_LIMIT)
        .collect()
}

pub fn paginate<'a>(report: &'a Report, filter: &PredictionFilter) -> PredictionPage<'a> {
    let page = filter.page.unwrap_or(1).max(1);
    let limit = match filter.limit {
        Some(0) | None => DEFAULT_PAGE_SIZE,
        Some(limit) => limit.min(MAX_PAGE_SIZE),
    };

    let matching: Vec<&EmployeePrediction> = report
        .predictions
        .iter()
        .filter(|p| filter.risk.map_or(true, |risk| p.attrition_level == risk))
        .filter(|p| {
            filter
                .department
                .as_deref()
                .map_or(true, |department| p.department == department)
        })
        .collect();

    let total = matching.len();
    let data = matching
        .into_iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .collect();

    PredictionPage {
        data,
        pagination: Pagination {
            page,
            limit,
            total,
            pages: total.div_ceil(limit),
        },
    }
}
