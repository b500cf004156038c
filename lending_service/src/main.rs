use anyhow::Context;
use lending_auth::token::JwtKeys;
use lending_entrypoint::LendingEntrypoint;
use lending_service::{
    api::{self, context::AppState},
    config::Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    LendingEntrypoint::default().init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::trace!("initialized config");

    let db = lending_db_client::connect(&config.database_url)
        .await
        .context("could not connect to db")?;

    lending_db_client::run_migrations(&db)
        .await
        .context("could not migrate db")?;

    tracing::trace!("initialized db connection");

    let jwt_keys = JwtKeys::new(&config.jwt_secret);

    api::setup_and_serve(&config, AppState { db, jwt_keys }).await
}
