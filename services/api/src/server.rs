use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_underwriting_routes;
use axum::Extension;
use axum::Router;
use axum_prometheus::PrometheusMetricLayer;
use credit_risk::config::AppConfig;
use credit_risk::error::AppError;
use credit_risk::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let readiness = Arc::new(AtomicBool::new(false));
    let app = build_app(readiness.clone());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness.store(true, Ordering::Release);
    info!(?config.environment, %addr, "credit risk underwriting service ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("credit risk underwriting service stopped");
    Ok(())
}

fn build_app(readiness: Arc<AtomicBool>) -> Router {
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let state = AppState {
        readiness,
        metrics: Arc::new(prometheus_handle),
    };

    with_underwriting_routes()
        .layer(Extension(state))
        .layer(prometheus_layer)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        info!("ctrl-c handler unavailable; running until the task is aborted");
        std::future::pending::<()>().await;
    }
}
