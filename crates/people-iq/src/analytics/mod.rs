pub mod domain;
pub mod ingest;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod scoring;

pub use domain::{AbsenceRisk, AttritionLevel, BehavioralRiskLevel, PromotionReadiness};
pub use ingest::{AttritionTableLoader, EmployeeTable, EmployeeTableLoader, IngestError};
pub use pipeline::{assemble, generate_report};
pub use record::{EmployeeRecord, FieldValue};
pub use report::{DepartmentSummary, EmployeePrediction, Report, ReportSummary};
