pub mod loans;
pub mod paths;
pub mod resources;
pub mod seed;
pub mod users;

mod db;
pub use db::{connect, run_migrations};
