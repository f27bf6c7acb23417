use std::collections::HashMap;

/// Column names read from the primary ML feature table.
pub mod fields {
    pub const EMPLOYEE_ID: &str = "EmployeeID";
    pub const DEPARTMENT: &str = "Department";
    pub const JOB_TITLE: &str = "JobTitle";
    pub const GENDER: &str = "Gender";
    pub const ENGAGEMENT_SCORE: &str = "EngagementScore";
    pub const BURNOUT_RISK_SCORE: &str = "BurnoutRiskScore";
    pub const TENURE_YEARS: &str = "TenureYears";
    pub const PERFORMANCE_RATING: &str = "PerformanceRating";
    pub const AVG_OVERALL_SCORE: &str = "AvgOverallScore";
    pub const TRAINING_COUNT: &str = "TrainingCount";
    pub const DAYS_SINCE_LAST_TRAINING: &str = "DaysSinceLastTraining";
    pub const NO_TRAINING_FLAG: &str = "NoTrainingFlag";
    pub const PERFORMANCE_DROP_FLAG: &str = "PerformanceDropFlag";
    pub const CAREER_STAGNATION_FLAG: &str = "CareerStagnationFlag";
    pub const PAY_STAGNATION_FLAG: &str = "PayStagnationFlag";
    pub const ABSENCE_DAYS: &str = "AbsenceDays_Last6M";
    pub const HIGH_ABSENCE_FLAG: &str = "HighAbsenceFlag";
    pub const SALARY: &str = "Salary";
}

/// Fallback values used when a field is absent or unparsable.
///
/// Some fields are read with different fallbacks depending on the rule doing
/// the reading; those carry one constant per use.
pub mod defaults {
    pub const UNKNOWN_LABEL: &str = "Unknown";

    /// EngagementScore as seen by attrition risk and risk factors.
    pub const ENGAGEMENT_FOR_RISK: f64 = 3.0;
    /// EngagementScore as seen by recommendations and the reported score.
    pub const ENGAGEMENT: f64 = 0.0;

    /// PerformanceRating as seen by the promotion score.
    pub const PERFORMANCE_FOR_PROMOTION: f64 = 0.0;
    /// PerformanceRating everywhere else.
    pub const PERFORMANCE: f64 = 3.0;

    pub const AVG_OVERALL_SCORE: f64 = 0.0;
    pub const BURNOUT: f64 = 0.0;
    pub const TENURE_YEARS: f64 = 0.0;
    pub const TRAINING_COUNT: f64 = 0.0;
    pub const DAYS_SINCE_LAST_TRAINING: f64 = 0.0;
    pub const ABSENCE_DAYS: f64 = 0.0;
    pub const SALARY: f64 = 0.0;
    pub const FLAG: f64 = 0.0;
}

/// Conversion from a raw cell into a typed value.
pub trait FieldValue: Sized {
    fn from_field(raw: &str) -> Option<Self>;
}

impl FieldValue for f64 {
    fn from_field(raw: &str) -> Option<Self> {
        parse_number(raw)
    }
}

impl FieldValue for i64 {
    fn from_field(raw: &str) -> Option<Self> {
        parse_number(raw).map(|value| value.trunc() as i64)
    }
}

impl FieldValue for String {
    fn from_field(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    if let Ok(value) = raw.parse::<f64>() {
        return value.is_finite().then_some(value);
    }

    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" => Some(1.0),
        "false" | "no" => Some(0.0),
        _ => None,
    }
}

/// One row of the input table: field name to trimmed, non-empty cell.
///
/// Records are immutable once built. Every read goes through [`EmployeeRecord::get`]
/// so missing or malformed cells fall back to the caller's default instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeRecord {
    fields: HashMap<String, String>,
}

impl EmployeeRecord {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let fields = pairs
            .into_iter()
            .filter_map(|(name, value)| {
                let value = value.as_ref().trim();
                (!value.is_empty()).then(|| (name.into(), value.to_string()))
            })
            .collect();

        Self { fields }
    }

    pub fn raw(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn get<T: FieldValue>(&self, field: &str, default: T) -> T {
        self.get_opt(field).unwrap_or(default)
    }

    pub fn get_opt<T: FieldValue>(&self, field: &str) -> Option<T> {
        self.raw(field).and_then(T::from_field)
    }

    pub fn number(&self, field: &str, default: f64) -> f64 {
        self.get(field, default)
    }

    pub fn text(&self, field: &str, default: &str) -> String {
        self.get_opt(field).unwrap_or_else(|| default.to_string())
    }

    /// Flag set when the field holds exactly 1.
    pub fn flag(&self, field: &str) -> bool {
        self.number(field, defaults::FLAG) == 1.0
    }

    /// Flag set when the field holds any non-zero value.
    pub fn truthy(&self, field: &str) -> bool {
        self.number(field, defaults::FLAG) != 0.0
    }

    pub fn department(&self) -> String {
        self.text(fields::DEPARTMENT, defaults::UNKNOWN_LABEL)
    }
}
