use crate::cli::ServeArgs;
use crate::infra::{seed_ads, AppState, InMemoryAdRepository};
use crate::routes::with_ads_routes;
use ad_scoring::ads::{AdsService, ScoringRules};
use ad_scoring::config::AppConfig;
use ad_scoring::error::AppError;
use ad_scoring::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let rules = ScoringRules::default();
    let ads = seed_ads(&config.ads)?;
    let repository = Arc::new(InMemoryAdRepository::with_ads(&rules, ads));
    let ads_service = Arc::new(AdsService::new(repository, rules));

    if config.ads.score_on_startup {
        ads_service.score_all()?;
    }

    let app = with_ads_routes(ads_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ad scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
