use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing::info;

mod api;
mod cli;
mod config;
mod db;
mod logging;
mod shutdown;
mod views;

use crate::api::forms::form_config;
use crate::cli::{Cli, Cmds};
use crate::config::Config;
use crate::shutdown::ShutdownCoordinator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let Config {
        database_url,
        host,
        port,
        max_db_connections,
        max_payload_size,
        log_dir,
    } = Config::from_env().with_cli(&cli);

    logging::init(&log_dir)?;

    let pool = db::connection::get_connection(&database_url, max_db_connections)
        .await
        .map_err(std::io::Error::other)?;
    info!("Connected to database at {}", database_url);

    db::schema::create_tables(&pool)
        .await
        .map_err(std::io::Error::other)?;

    if cli.command() == &Cmds::InitDb {
        pool.close().await;
        return Ok(());
    }

    info!("Configuration loaded successfully:");
    info!("  - Max payload size: {} bytes", max_payload_size);
    info!("  - Max database connections: {}", max_db_connections);

    let server_pool = pool.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(server_pool.clone()))
            .app_data(form_config(max_payload_size))
            .configure(api::routes)
    })
    .bind((host.as_str(), port))?
    .disable_signals()
    .run();

    info!("Server running on http://{}:{}", host, port);

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    ShutdownCoordinator::new(server_handle, server_task, pool)
        .wait_for_shutdown()
        .await
}
