use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::access::AccessGuard;
use crate::infra::repositories::{
    postgres_user_repo::PostgresUserRepo, postgres_company_repo::PostgresCompanyRepo,
    postgres_client_repo::PostgresClientRepo, postgres_category_repo::PostgresCategoryRepo,
    postgres_transaction_repo::PostgresTransactionRepo, postgres_invoice_repo::PostgresInvoiceRepo,
    sqlite_user_repo::SqliteUserRepo, sqlite_company_repo::SqliteCompanyRepo,
    sqlite_client_repo::SqliteClientRepo, sqlite_category_repo::SqliteCategoryRepo,
    sqlite_transaction_repo::SqliteTransactionRepo, sqlite_invoice_repo::SqliteInvoiceRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let company_repo: Arc<PostgresCompanyRepo> = Arc::new(PostgresCompanyRepo::new(pool.clone()));
        let access = Arc::new(AccessGuard::new(company_repo.clone()));

        AppState {
            config: config.clone(),
            user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
            company_repo,
            client_repo: Arc::new(PostgresClientRepo::new(pool.clone())),
            category_repo: Arc::new(PostgresCategoryRepo::new(pool.clone())),
            transaction_repo: Arc::new(PostgresTransactionRepo::new(pool.clone())),
            invoice_repo: Arc::new(PostgresInvoiceRepo::new(pool.clone())),
            access,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let company_repo: Arc<SqliteCompanyRepo> = Arc::new(SqliteCompanyRepo::new(pool.clone()));
        let access = Arc::new(AccessGuard::new(company_repo.clone()));

        AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            company_repo,
            client_repo: Arc::new(SqliteClientRepo::new(pool.clone())),
            category_repo: Arc::new(SqliteCategoryRepo::new(pool.clone())),
            transaction_repo: Arc::new(SqliteTransactionRepo::new(pool.clone())),
            invoice_repo: Arc::new(SqliteInvoiceRepo::new(pool.clone())),
            access,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
