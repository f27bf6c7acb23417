use crate::cli::ServeArgs;
use crate::generate::build_report;
use crate::infra::AppState;
use crate::routes::prediction_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use people_iq::config::AppConfig;
use people_iq::error::AppError;
use people_iq::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.ml_csv.take() {
        config.data.ml_csv = path;
    }

    telemetry::init(&config.telemetry)?;

    let report = build_report(&config.data)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        report: Arc::new(report),
    };

    let app = prediction_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "people-iq prediction service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
