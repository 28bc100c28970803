mod api;
mod config;
mod consensus;
mod ledger;
mod pow;
mod registry;
mod transaction;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::info;

use api::AppState;
use config::Settings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let settings = Settings::from_env();
    let state = web::Data::new(AppState::new(&settings));

    info!(
        "node id {} (difficulty {})",
        state.node_id, state.difficulty
    );
    println!(
        "⛓️ Starting ledger node at http://{}:{}",
        settings.host, settings.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
