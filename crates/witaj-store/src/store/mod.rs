//! SQLite-backed store.
//!
//! Split into focused submodules:
//! - `langs` — read-only language lookup
//! - `todos` — todo list and toggle

mod langs;
mod todos;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;
use witaj_core::{config::StoreConfig, error::WitajError, lang::Lang, shellexpand};

/// Persistent store backed by SQLite.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Create a new store, running migrations and seeding the language
    /// table on first use.
    pub async fn new(config: &StoreConfig) -> Result<Self, WitajError> {
        // ":memory:" keeps everything in one connection; anything else is a
        // file path that may need its parent directory created.
        let (url, max_connections) = if config.db_path == ":memory:" {
            ("sqlite::memory:".to_string(), 1)
        } else {
            let db_path = shellexpand(&config.db_path);
            if let Some(parent) = std::path::Path::new(&db_path).parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| WitajError::Store(format!("failed to create data dir: {e}")))?;
            }
            (format!("sqlite:{db_path}"), 4)
        };

        let opts = SqliteConnectOptions::from_str(&url)
            .map_err(|e| WitajError::Store(format!("invalid db path: {e}")))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(opts)
            .await
            .map_err(|e| WitajError::Store(format!("failed to connect to sqlite: {e}")))?;

        Self::run_migrations(&pool).await?;
        Self::seed_languages(&pool, &config.languages).await?;

        info!("Store initialized at {}", config.db_path);

        Ok(Self { pool })
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run SQL migrations, tracking which have already been applied.
    async fn run_migrations(pool: &SqlitePool) -> Result<(), WitajError> {
        sqlx::raw_sql(
            "CREATE TABLE IF NOT EXISTS _migrations (
                name TEXT PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .execute(pool)
        .await
        .map_err(|e| WitajError::Store(format!("failed to create migrations table: {e}")))?;

        let migrations: &[(&str, &str)] =
            &[("001_init", include_str!("../../migrations/001_init.sql"))];

        for (name, sql) in migrations {
            let applied: Option<(String,)> =
                sqlx::query_as("SELECT name FROM _migrations WHERE name = ?")
                    .bind(name)
                    .fetch_optional(pool)
                    .await
                    .map_err(|e| {
                        WitajError::Store(format!("failed to check migration {name}: {e}"))
                    })?;

            if applied.is_some() {
                continue;
            }

            sqlx::raw_sql(sql)
                .execute(pool)
                .await
                .map_err(|e| WitajError::Store(format!("migration {name} failed: {e}")))?;

            sqlx::query("INSERT INTO _migrations (name) VALUES (?)")
                .bind(name)
                .execute(pool)
                .await
                .map_err(|e| {
                    WitajError::Store(format!("failed to record migration {name}: {e}"))
                })?;
        }
        Ok(())
    }

    /// Apply the configured language seed list. Idempotent: existing rows
    /// keep their original message, so seeding never mutates data.
    async fn seed_languages(pool: &SqlitePool, languages: &[Lang]) -> Result<(), WitajError> {
        for lang in languages {
            sqlx::query(
                "INSERT OR IGNORE INTO languages (id, welcome_message, code) VALUES (?, ?, ?)",
            )
            .bind(lang.id)
            .bind(&lang.welcome_message)
            .bind(&lang.code)
            .execute(pool)
            .await
            .map_err(|e| WitajError::Store(format!("failed to seed language {}: {e}", lang.id)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
