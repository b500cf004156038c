#![deny(missing_docs)]
//! This crate provides a standardized initialization process that should be used across entrypoint crates.
//! This is used to provide consistent behaviour with e.g. tracing configurations

use lending_env::Environment;
use tracing_subscriber::EnvFilter;

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct LendingEntrypoint {
    env: Environment,
}

impl Default for LendingEntrypoint {
    fn default() -> Self {
        LendingEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [LendingEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl LendingEntrypoint {
    /// create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    ///
    /// Local gets a human-readable pretty format; everything else emits
    /// flattened JSON lines for log ingestion.
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(())
    }
}
