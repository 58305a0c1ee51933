mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_owner_and_stranger_access() {
    let app = TestApp::new().await;

    let company = app.create_company("user-a", "Alpha Books").await;
    let company_id = company["id"].as_str().unwrap();

    // Owner sees the dashboard.
    let (status, _) = app
        .request("GET", &format!("/api/v1/companies/{}/dashboard", company_id), Some("user-a"), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    // A user without membership is rejected before the ledger is touched.
    let (status, _) = app
        .request("GET", &format!("/api/v1/companies/{}/dashboard", company_id), Some("user-b"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A company that does not exist is a plain denial too.
    let (status, _) = app
        .request("GET", "/api/v1/companies/no-such-company/dashboard", Some("user-a"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_membership_grants_and_revokes_access() {
    let app = TestApp::new().await;

    let company = app.create_company("user-a", "Alpha Books").await;
    let company_id = company["id"].as_str().unwrap().to_string();
    let dashboard_uri = format!("/api/v1/companies/{}/dashboard", company_id);

    let (status, _) = app.request("GET", &dashboard_uri, Some("user-b"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Grant membership: access works on the very next call.
    let (status, _) = app
        .request(
            "POST",
            &format!("/api/v1/companies/{}/members", company_id),
            Some("user-a"),
            Some(json!({ "user_id": "user-b" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.request("GET", &dashboard_uri, Some("user-b"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["total_revenue"], 0.0);
    assert_eq!(body["summary"]["net_profit"], 0.0);

    // Revoke: the check is re-evaluated per call, not cached.
    let (status, _) = app
        .request(
            "DELETE",
            &format!("/api/v1/companies/{}/members/user-b", company_id),
            Some("user-a"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.request("GET", &dashboard_uri, Some("user-b"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_member_management_conflicts() {
    let app = TestApp::new().await;

    let company = app.create_company("user-a", "Alpha Books").await;
    let company_id = company["id"].as_str().unwrap();
    let members_uri = format!("/api/v1/companies/{}/members", company_id);

    // The owner is never also stored as a member.
    let (status, _) = app
        .request("POST", &members_uri, Some("user-a"), Some(json!({ "user_id": "user-a" })))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .request("POST", &members_uri, Some("user-a"), Some(json!({ "user_id": "user-b" })))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request("POST", &members_uri, Some("user-a"), Some(json!({ "user_id": "user-b" })))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = app.request("GET", &members_uri, Some("user-a"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_by_id_guessing_is_blocked() {
    let app = TestApp::new().await;

    let company_a = app.create_company("user-a", "Alpha Books").await;
    let company_a_id = company_a["id"].as_str().unwrap().to_string();
    app.create_company("user-b", "Beta Books").await;

    let transaction = app
        .create_transaction(
            "user-a",
            json!({
                "company_id": company_a_id,
                "kind": "income",
                "amount": 150.0,
                "description": "Consulting",
                "date": "2024-05-01"
            }),
        )
        .await;
    let transaction_id = transaction["id"].as_str().unwrap().to_string();

    // user-b owns a company of their own, but the delete is checked
    // against the transaction's company, not anything the caller supplies.
    let (status, _) = app
        .request("DELETE", &format!("/api/v1/transactions/{}", transaction_id), Some("user-b"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // The row is still there for the rightful owner.
    let (status, body) = app
        .request(
            "GET",
            &format!("/api/v1/companies/{}/transactions", company_a_id),
            Some("user-a"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_missing_identity_header_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app.request("GET", "/api/v1/companies", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
