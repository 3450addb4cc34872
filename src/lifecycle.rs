//! Server bootstrap and run loop.

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;
use tablegate_admin::MemoryTableAdmin;
use tablegate_api::routes::configure_routes;
use tablegate_api::TableResourceRouter;
use tablegate_commons::TableAdmin;
use tablegate_configs::ServerConfig;

use crate::middleware;

/// Long-lived components shared by every worker.
#[derive(Clone)]
pub struct ApplicationComponents {
    pub router: web::Data<TableResourceRouter>,
}

impl ApplicationComponents {
    pub fn new(admin: Arc<dyn TableAdmin>) -> Self {
        Self {
            router: web::Data::new(TableResourceRouter::new(admin)),
        }
    }
}

/// Build application components backed by the in-process administration
/// client.
pub fn bootstrap(_config: &ServerConfig) -> Result<ApplicationComponents> {
    let admin: Arc<dyn TableAdmin> = Arc::new(MemoryTableAdmin::new());
    debug!("Using in-memory table administration client");
    Ok(ApplicationComponents::new(admin))
}

/// Register app data and routes. Shared by the server and tests.
pub fn configure_app(
    cfg: &mut web::ServiceConfig,
    config: &ServerConfig,
    components: &ApplicationComponents,
) {
    cfg.app_data(components.router.clone())
        .app_data(web::PayloadConfig::new(config.limits.request_body_limit_bytes));
    configure_routes(cfg, &config.server.api_prefix);
}

/// Run the HTTP server until a termination signal is received.
pub async fn run(config: &ServerConfig, components: ApplicationComponents) -> Result<()> {
    let bind_addr = config.server.bind_addr();
    let workers = if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    };
    info!("Starting HTTP server on {}", bind_addr);
    info!(
        "Server config: workers={}, api_prefix='{}', body_limit={}B",
        workers, config.server.api_prefix, config.limits.request_body_limit_bytes
    );

    let app_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::request_logger())
            .configure(|cfg| configure_app(cfg, &app_config, &components))
    })
    .workers(workers)
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
