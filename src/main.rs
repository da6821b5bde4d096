use std::io::Error;
use std::sync::Arc;

use poem::{Route, Server, listener::TcpListener};
use poem_openapi::OpenApiService;
use sqlx::postgres::PgPoolOptions;
use tokio::main;
use tracing_subscriber::EnvFilter;

use crate::{
    application::{
        handlers::sms_dispatcher::SmsDispatcher,
        services::quota::{QuotaConfig, QuotaTracker},
        usecases::scan_scheduled_drops::ScanScheduledDropsUseCase,
    },
    config::Config,
    domain::repositories::LeadRepository,
    infrastructure::{
        messaging::sms_api::{HttpSmsGateway, SmsApiConfig},
        repositories::{in_memory::InMemoryLeadRepository, postgres::PostgresLeadRepository},
        scheduler::{DropScanWorker, DropScheduleConfig},
    },
    presentation::http::endpoints::{
        messages::MessagesEndpoints,
        root::{ApiState, Endpoints},
    },
};

mod application;
mod config;
mod domain;
mod infrastructure;
mod presentation;

#[main]
async fn main() -> Result<(), Error> {
    let config = Config::try_parse().map_err(Error::other)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let quota = Arc::new(QuotaTracker::new(QuotaConfig::default()));
    let gateway = HttpSmsGateway::new(SmsApiConfig {
        base_url: config.sms_api_base_url.clone(),
        api_token: config.sms_api_token.clone(),
        company_id: config.sms_company_id.clone(),
    });
    let dispatcher = Arc::new(SmsDispatcher::new(quota, gateway));

    let leads: Arc<dyn LeadRepository> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new().connect(url).await.map_err(Error::other)?;
            Arc::new(PostgresLeadRepository::new(pool))
        }
        None => Arc::new(InMemoryLeadRepository::new()),
    };

    let scan_usecase = Arc::new(ScanScheduledDropsUseCase::new(leads, dispatcher.clone()));
    DropScanWorker::new(
        scan_usecase,
        DropScheduleConfig {
            day: config.drop_day,
            time: config.drop_time,
        },
    )
    .spawn();

    let state = Arc::new(ApiState { dispatcher });

    let server_url = format!("{}://{}:{}", config.scheme, config.host, config.port);

    tracing::info!(%server_url, "starting server");

    let api_service = OpenApiService::new(
        (Endpoints, MessagesEndpoints::new(state)),
        "SMS Dispatch API",
        "0.1.0",
    )
    .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();
    let app = Route::new().nest("/api", api_service).nest("/", ui);

    Server::new(TcpListener::bind(format!("localhost:{}", config.port)))
        .run(app)
        .await
}
