use chrono::Utc;
use clap::Args;
use people_iq::analytics::{
    generate_report, AttritionTableLoader, EmployeeTableLoader, Report,
};
use people_iq::config::{AppConfig, DataConfig};
use people_iq::error::AppError;
use people_iq::telemetry;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Args, Debug, Default)]
pub(crate) struct RunArgs {
    /// Primary ML feature table (overrides PEOPLEIQ_ML_CSV)
    #[arg(long)]
    pub(crate) ml_csv: Option<PathBuf>,
    /// Secondary HR attrition table (overrides PEOPLEIQ_ATTRITION_CSV)
    #[arg(long)]
    pub(crate) attrition_csv: Option<PathBuf>,
    /// Destination for the JSON report (overrides PEOPLEIQ_OUTPUT)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Print per-department metrics after writing the report
    #[arg(long)]
    pub(crate) print_summary: bool,
}

pub(crate) fn run_batch(args: RunArgs) -> Result<(), AppError> {
    let RunArgs {
        ml_csv,
        attrition_csv,
        output,
        print_summary,
    } = args;

    let mut config = AppConfig::load()?;
    if let Some(path) = ml_csv {
        config.data.ml_csv = path;
    }
    if let Some(path) = attrition_csv {
        config.data.attrition_csv = Some(path);
    }
    if let Some(path) = output {
        config.data.output = path;
    }

    telemetry::init(&config.telemetry)?;

    let report = build_report(&config.data)?;
    write_report(&report, &config.data.output)?;
    render_summary(&report, &config.data.output, print_summary);
    Ok(())
}

/// Loads the input tables and scores the primary one. A missing or unreadable
/// secondary table is logged and skipped.
pub(crate) fn build_report(data: &DataConfig) -> Result<Report, AppError> {
    let table = EmployeeTableLoader::from_path(&data.ml_csv)?;

    match &data.attrition_csv {
        Some(path) => {
            if let Err(err) = AttritionTableLoader::from_path(path) {
                warn!(path = %path.display(), error = %err, "skipping attrition reference table");
            }
        }
        None => info!("attrition reference table disabled"),
    }

    Ok(generate_report(&table.records, Utc::now()))
}

pub(crate) fn write_report(report: &Report, path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    info!(
        path = %path.display(),
        predictions = report.predictions.len(),
        "wrote prediction report"
    );
    Ok(())
}

fn render_summary(report: &Report, path: &Path, detailed: bool) {
    let summary = &report.summary;
    println!("PeopleIQ predictions");
    println!("Generated at: {}", report.generated_at.to_rfc3339());
    println!("Output: {}", path.display());
    println!(
        "Employees: {} | avg engagement {:.2} | avg burnout {:.3} | avg promotion score {:.3}",
        summary.total_employees,
        summary.avg_engagement,
        summary.avg_burnout_score,
        summary.avg_promotion_readiness
    );

    if !detailed {
        return;
    }

    if summary.department_metrics.is_empty() {
        println!("\nDepartments: none");
        return;
    }

    println!("\nDepartments");
    for department in summary.department_metrics.iter() {
        println!(
            "- {:<20} {:>4} employees | engagement {:.2} | burnout {:.3} | salary {:.0} | ready {}",
            department.name,
            department.count,
            department.avg_engagement,
            department.avg_burnout,
            department.avg_salary,
            department.promotion_ready
        );
    }
}
