use crate::cli::ServeArgs;
use crate::infra::{attorney_pages, AppState};
use crate::routes::{mount, with_service_routes};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use lpa_caseworker::config::AppConfig;
use lpa_caseworker::error::AppError;
use lpa_caseworker::telemetry;
use lpa_caseworker::workflows::attorneys::attorney_router;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let pages = attorney_pages(&config)?;
    let app = with_service_routes(mount(attorney_router(pages), &config.server.prefix))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        prefix = %config.server.prefix,
        sirius = %config.sirius.base_url,
        "caseworker frontend ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
