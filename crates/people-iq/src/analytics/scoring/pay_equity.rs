use super::round_to;
use crate::analytics::record::{fields, EmployeeRecord};
use std::collections::HashMap;

const GAP_PLACES: i32 = 3;

#[derive(Debug, Default, Clone, Copy)]
struct SalaryTotals {
    sum: f64,
    count: usize,
}

/// Mean salary per department, computed once over the whole table and then
/// only read while individual records are scored.
#[derive(Debug, Default, Clone)]
pub struct DepartmentSalaryMeans {
    means: HashMap<String, f64>,
}

impl DepartmentSalaryMeans {
    pub fn from_records(records: &[EmployeeRecord]) -> Self {
        let mut totals: HashMap<String, SalaryTotals> = HashMap::new();

        for record in records {
            if let Some(salary) = record.get_opt::<f64>(fields::SALARY) {
                let entry = totals.entry(record.department()).or_default();
                entry.sum += salary;
                entry.count += 1;
            }
        }

        let means = totals
            .into_iter()
            .map(|(department, totals)| (department, totals.sum / totals.count as f64))
            .collect();

        Self { means }
    }

    pub fn mean(&self, department: &str) -> Option<f64> {
        self.means.get(department).copied()
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// Relative deviation from the department mean; 0.0 when the record has no
    /// salary or the department mean is zero.
    pub fn gap(&self, record: &EmployeeRecord) -> f64 {
        let Some(salary) = record.get_opt::<f64>(fields::SALARY) else {
            return 0.0;
        };

        match self.mean(&record.department()) {
            Some(mean) if mean != 0.0 => round_to((salary - mean) / mean, GAP_PLACES),
            _ => 0.0,
        }
    }
}

/// Gap for every record, in input order.
pub fn pay_equity_gaps(records: &[EmployeeRecord]) -> Vec<f64> {
    let means = DepartmentSalaryMeans::from_records(records);
    records.iter().map(|record| means.gap(record)).collect()
}
