use std::time::Duration;

use anyhow::{Context, bail};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use super::schema::initialize_schema;
use crate::config::DatabaseConfig;

/// Store engines the planning tables can live in, picked by URL scheme.
///
/// SQLite connections are opened by sqlx with `foreign_keys = ON` and a 5s
/// busy timeout on every pooled connection; MPS and MRP rows depend on the
/// former.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
    Postgres,
}

impl StoreKind {
    pub fn from_url(url: &str) -> anyhow::Result<Self> {
        let normalized = url.trim().to_ascii_lowercase();
        if normalized.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else if normalized.starts_with("postgres://") || normalized.starts_with("postgresql://")
        {
            Ok(Self::Postgres)
        } else {
            bail!(
                "unsupported database url '{}'; expected sqlite:, postgres:// or postgresql://",
                scheme_only(url)
            )
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgres",
        }
    }
}

fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(false);
    options
}

// Urls may carry credentials; error messages only keep the scheme.
fn scheme_only(url: &str) -> String {
    let trimmed = url.trim();
    if let Some((scheme, _)) = trimmed.split_once("://") {
        format!("{scheme}://<redacted>")
    } else if let Some((scheme, _)) = trimmed.split_once(':') {
        format!("{scheme}:<redacted>")
    } else {
        "<invalid-url>".to_string()
    }
}

/// Opens the store named by `cfg.url` and makes sure every table exists.
pub async fn open(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let kind = StoreKind::from_url(&cfg.url)?;
    info!(store = kind.as_str(), "opening store");

    let db = Database::connect(connect_options(cfg))
        .await
        .with_context(|| format!("failed to connect to {} store", kind.as_str()))?;
    initialize_schema(&db).await?;
    Ok(db)
}

pub async fn close(db: DatabaseConnection) -> anyhow::Result<()> {
    db.close().await.context("failed to close store")?;
    info!("store closed");
    Ok(())
}
