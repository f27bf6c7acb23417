use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttritionLevel {
    Low,
    Medium,
    High,
}

impl AttritionLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromotionReadiness {
    #[serde(rename = "Not Ready")]
    NotReady,
    Developing,
    Ready,
}

impl PromotionReadiness {
    pub const fn ordered() -> [Self; 3] {
        [Self::Ready, Self::Developing, Self::NotReady]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotReady => "Not Ready",
            Self::Developing => "Developing",
            Self::Ready => "Ready",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehavioralRiskLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbsenceRisk {
    Low,
    Medium,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_serialize_as_display_strings() {
        let json = serde_json::to_string(&PromotionReadiness::NotReady).expect("serializes");
        assert_eq!(json, "\"Not Ready\"");
        let json = serde_json::to_string(&BehavioralRiskLevel::Moderate).expect("serializes");
        assert_eq!(json, "\"Moderate\"");
    }

    #[test]
    fn attrition_level_parses_labels_case_insensitively() {
        assert_eq!(AttritionLevel::from_label("high"), Some(AttritionLevel::High));
        assert_eq!(AttritionLevel::from_label(" Medium "), Some(AttritionLevel::Medium));
        assert_eq!(AttritionLevel::from_label("critical"), None);
    }
}
