mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    tracing::info!("Starting server ({:?})", config.environment);

    let db = startup::connect_to_database(&config).await?;

    let app = startup::with_layers(router::router().with_state(AppState::new(db)));

    startup::serve(&config, app).await
}
