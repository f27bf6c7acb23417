use crate::analytics::domain::{
    AbsenceRisk, AttritionLevel, BehavioralRiskLevel, PromotionReadiness,
};

const ATTRITION_HIGH: f64 = 0.7;
const ATTRITION_MEDIUM: f64 = 0.4;
const PROMOTION_READY: f64 = 0.7;
const PROMOTION_DEVELOPING: f64 = 0.4;
const BEHAVIORAL_HIGH: f64 = 0.6;
const BEHAVIORAL_MODERATE: f64 = 0.3;
const ABSENCE_HIGH_DAYS: i64 = 15;
const ABSENCE_MEDIUM_DAYS: i64 = 8;

// Cutoffs are inclusive: a score equal to a cutoff lands in the upper tier.

pub fn attrition_level(score: f64) -> AttritionLevel {
    if score >= ATTRITION_HIGH {
        AttritionLevel::High
    } else if score >= ATTRITION_MEDIUM {
        AttritionLevel::Medium
    } else {
        AttritionLevel::Low
    }
}

pub fn promotion_readiness(score: f64) -> PromotionReadiness {
    if score >= PROMOTION_READY {
        PromotionReadiness::Ready
    } else if score >= PROMOTION_DEVELOPING {
        PromotionReadiness::Developing
    } else {
        PromotionReadiness::NotReady
    }
}

pub fn behavioral_risk_level(score: f64) -> BehavioralRiskLevel {
    if score >= BEHAVIORAL_HIGH {
        BehavioralRiskLevel::High
    } else if score >= BEHAVIORAL_MODERATE {
        BehavioralRiskLevel::Moderate
    } else {
        BehavioralRiskLevel::Low
    }
}

pub fn absence_risk(days: i64) -> AbsenceRisk {
    if days >= ABSENCE_HIGH_DAYS {
        AbsenceRisk::High
    } else if days >= ABSENCE_MEDIUM_DAYS {
        AbsenceRisk::Medium
    } else {
        AbsenceRisk::Low
    }
}
