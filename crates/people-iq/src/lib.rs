//! Batch scoring of HR employee records into attrition, promotion, performance
//! and wellbeing predictions, plus the views the HTTP service serves from them.

pub mod analytics;
pub mod config;
pub mod error;
pub mod telemetry;
