use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use clap::Parser;
use env_logger::Env;
use log::info;

mod advertisement;
mod cli;
mod config;
mod database;
mod middleware;
mod notifier;
mod post;
mod router;
mod state;
mod utils;

use cli::{Cli, Command};
use config::AppConfig;
use database::DocumentStore;
use middleware::not_found::not_found;
use notifier::EventNotifier;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::other(e)
    })?;

    let store: Arc<dyn DocumentStore> = Arc::new(
        database::connect_to_mongo(&config.store)
            .await
            .map_err(std::io::Error::other)?,
    );

    match cli.command() {
        Command::SeedPosts => seed_posts(store).await,
        Command::Serve => serve(config, store).await,
    }
}

async fn seed_posts(store: Arc<dyn DocumentStore>) -> std::io::Result<()> {
    let posts = post::post_service::PostService::new(store);
    let ids = posts
        .seed_posts(post::post_model::sample_posts())
        .await
        .map_err(std::io::Error::other)?;

    info!("Inserted {} posts", ids.len());
    Ok(())
}

async fn serve(config: AppConfig, store: Arc<dyn DocumentStore>) -> std::io::Result<()> {
    let notifier = EventNotifier::new(config.event_grid.clone());
    if notifier.is_enabled() {
        info!("Publishing advertisement events to Event Grid");
    }

    let state = AppState::new(store, notifier);

    info!("Starting server on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .configure(|cfg| state.configure(cfg))
            .default_service(web::to(not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
