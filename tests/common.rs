use ledger_backend::{
    api::router::create_router,
    config::Config,
    domain::services::access::AccessGuard,
    infra::repositories::{
        sqlite_category_repo::SqliteCategoryRepo,
        sqlite_client_repo::SqliteClientRepo,
        sqlite_company_repo::SqliteCompanyRepo,
        sqlite_invoice_repo::SqliteInvoiceRepo,
        sqlite_transaction_repo::SqliteTransactionRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let company_repo = Arc::new(SqliteCompanyRepo::new(pool.clone()));
        let access = Arc::new(AccessGuard::new(company_repo.clone()));

        let state = Arc::new(AppState {
            config,
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            company_repo,
            client_repo: Arc::new(SqliteClientRepo::new(pool.clone())),
            category_repo: Arc::new(SqliteCategoryRepo::new(pool.clone())),
            transaction_repo: Arc::new(SqliteTransactionRepo::new(pool.clone())),
            invoice_repo: Arc::new(SqliteInvoiceRepo::new(pool.clone())),
            access,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Fires one request as the given user (via the trusted identity
    /// header) and returns status plus parsed JSON body, Null when empty.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        user_id: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user_id) = user_id {
            builder = builder.header("X-User-Id", user_id);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, parsed)
    }

    pub async fn create_company(&self, user_id: &str, name: &str) -> Value {
        let (status, body) = self
            .request(
                "POST",
                "/api/v1/companies",
                Some(user_id),
                Some(serde_json::json!({ "name": name })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create_company failed: {:?}", body);
        body
    }

    pub async fn create_client(&self, user_id: &str, company_id: &str, name: &str) -> Value {
        let (status, body) = self
            .request(
                "POST",
                "/api/v1/clients",
                Some(user_id),
                Some(serde_json::json!({ "company_id": company_id, "name": name })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create_client failed: {:?}", body);
        body
    }

    pub async fn create_transaction(&self, user_id: &str, payload: Value) -> Value {
        let (status, body) = self
            .request("POST", "/api/v1/transactions", Some(user_id), Some(payload))
            .await;
        assert_eq!(status, StatusCode::OK, "create_transaction failed: {:?}", body);
        body
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
