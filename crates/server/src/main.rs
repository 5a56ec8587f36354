use std::sync::Arc;

use anyhow::Context;
use log::info;
use microcms::MicroCmsClient;
use microcms_blog::{AppState, Config, Renderer, build_router, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_logger().context("Failed to set up logging")?;

    let config = Config::from_env().context("Failed to load configuration")?;
    let addr = config.bind_addr();

    let renderer = Renderer::new(config.templates_dir.clone(), config.template_auto_reload);
    let client = MicroCmsClient::new(&config.service_domain, config.api_key)
        .context("Failed to create the microCMS client")?;

    info!(
        "Content from {}, templates in {} (auto reload: {})",
        client.base_url(),
        config.templates_dir.display(),
        config.template_auto_reload
    );

    let state = AppState::new(Arc::new(client), renderer);
    let app = build_router(state, &config.public_dir);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server stopped")?;

    Ok(())
}
