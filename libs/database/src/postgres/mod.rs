//! PostgreSQL connection management built on SeaORM

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    run_migrations,
};
pub use health::check_health;

// Re-export the connection type so consumers don't need a direct sea-orm dep
pub use sea_orm::DatabaseConnection;
