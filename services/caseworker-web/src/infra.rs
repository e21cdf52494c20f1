use lpa_caseworker::config::AppConfig;
use lpa_caseworker::error::AppError;
use lpa_caseworker::sirius::SiriusClient;
use lpa_caseworker::web::{JsonRenderer, WebSettings};
use lpa_caseworker::workflows::attorneys::AttorneyPages;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Attorney pages backed by the configured Sirius instance.
pub(crate) fn attorney_pages(
    config: &AppConfig,
) -> Result<Arc<AttorneyPages<SiriusClient>>, AppError> {
    let client = Arc::new(SiriusClient::new(&config.sirius)?);
    Ok(Arc::new(AttorneyPages::new(
        client,
        Arc::new(JsonRenderer),
        WebSettings::from(config),
    )))
}
