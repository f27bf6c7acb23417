use metrics_exporter_prometheus::PrometheusHandle;
use people_iq::analytics::report::insights::PredictionFilter;
use people_iq::analytics::{AttritionLevel, Report};
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) report: Arc<Report>,
}

/// Query string accepted by the paginated prediction listing.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    #[serde(default)]
    pub(crate) risk: Option<String>,
    #[serde(default)]
    pub(crate) department: Option<String>,
    #[serde(default)]
    pub(crate) page: Option<usize>,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl ListQuery {
    pub(crate) fn into_filter(self) -> Result<PredictionFilter, String> {
        let risk = match self.risk.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_risk(raw)?),
        };

        Ok(PredictionFilter {
            risk,
            department: self.department.filter(|value| !value.trim().is_empty()),
            page: self.page,
            limit: self.limit,
        })
    }
}

pub(crate) fn parse_risk(raw: &str) -> Result<AttritionLevel, String> {
    AttritionLevel::from_label(raw)
        .ok_or_else(|| format!("unknown risk level '{raw}', expected High, Medium or Low"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_ignored() {
        let query = ListQuery {
            risk: Some(" ".to_string()),
            department: Some(String::new()),
            page: Some(2),
            limit: None,
        };
        let filter = query.into_filter().expect("valid filter");
        assert_eq!(filter.risk, None);
        assert_eq!(filter.department, None);
        assert_eq!(filter.page, Some(2));
    }

    #[test]
    fn risk_label_is_case_insensitive() {
        assert_eq!(parse_risk("high"), Ok(AttritionLevel::High));
        assert!(parse_risk("severe").is_err());
    }
}
