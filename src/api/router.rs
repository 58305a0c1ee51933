use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, category, client, company, dashboard, health, invoice, member, report, transaction};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Identity (verified upstream; this only refreshes the profile cache)
        .route("/api/v1/auth/user", get(auth::get_current_user))

        // Companies & membership
        .route("/api/v1/companies", get(company::list_companies).post(company::create_company))
        .route("/api/v1/companies/{company_id}", get(company::get_company))
        .route("/api/v1/companies/{company_id}/members", post(member::add_member).get(member::list_members))
        .route("/api/v1/companies/{company_id}/members/{user_id}", delete(member::remove_member))

        // Dashboard
        .route("/api/v1/companies/{company_id}/dashboard", get(dashboard::get_dashboard))

        // Ledger
        .route("/api/v1/companies/{company_id}/transactions", get(transaction::list_transactions))
        .route("/api/v1/transactions", post(transaction::create_transaction))
        .route("/api/v1/transactions/{transaction_id}", put(transaction::update_transaction).delete(transaction::delete_transaction))
        .route("/api/v1/companies/{company_id}/clients", get(client::list_clients))
        .route("/api/v1/clients", post(client::create_client))
        .route("/api/v1/companies/{company_id}/categories", get(category::list_categories))
        .route("/api/v1/categories", post(category::create_category))

        // Invoices
        .route("/api/v1/companies/{company_id}/invoices", get(invoice::list_invoices))
        .route("/api/v1/invoices", post(invoice::create_invoice))
        .route("/api/v1/invoices/{invoice_id}/details", get(invoice::get_invoice_details))

        // Reports
        .route("/api/v1/companies/{company_id}/reports/profit-loss", get(report::profit_loss))
        .route("/api/v1/companies/{company_id}/reports/cash-flow", get(report::cash_flow))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
