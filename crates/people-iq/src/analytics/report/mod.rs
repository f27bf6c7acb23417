pub mod insights;
mod summary;
pub mod views;

pub use summary::{department_metrics, summarize};
pub use views::{DepartmentMetrics, DepartmentSummary, EmployeePrediction, Report, ReportSummary};
