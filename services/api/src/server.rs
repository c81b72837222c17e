use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::priority_routes;
use axum_prometheus::PrometheusMetricLayer;
use blood_priority::config::AppConfig;
use blood_priority::error::AppError;
use blood_priority::telemetry;
use std::sync::atomic::Ordering;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let state = AppState::new(prometheus_handle);
    let readiness_flag = state.readiness.clone();

    let app = priority_routes(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "blood request priority service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
