use std::path::PathBuf;

use anyhow::Context;
pub use lending_env::Environment;

/// The configuration parameters for the application.
///
/// These are pulled from environment variables; a `.env` file is loaded by
/// the entrypoint in local development.
pub struct Config {
    /// The connection URL for the SQLite database this application should use.
    pub database_url: String,
    /// The secret used to sign and validate member access tokens.
    pub jwt_secret: String,
    /// The port to listen for HTTP requests on.
    pub port: usize,
    /// Where the built frontend bundle lives on disk.
    pub frontend_dist: PathBuf,
    /// The environment we are in
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or("sqlite:database.db".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be provided")?;

        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("should be valid port number")?;

        let frontend_dist: PathBuf = std::env::var("FRONTEND_DIST")
            .unwrap_or("./frontend/dist".to_string())
            .into();

        let environment = Environment::new_or_prod();

        Ok(Config {
            database_url,
            jwt_secret,
            port,
            frontend_dist,
            environment,
        })
    }
}
