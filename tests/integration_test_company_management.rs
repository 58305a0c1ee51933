mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_create_company_seeds_default_categories() {
    let app = TestApp::new().await;

    let company = app.create_company("user-a", "Alpha Books").await;
    let company_id = company["id"].as_str().unwrap();
    assert_eq!(company["owner_id"], "user-a");
    assert_eq!(company["currency"], "USD");

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/v1/companies/{}/categories", company_id),
            Some("user-a"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 6);

    let income = categories.iter().filter(|c| c["kind"] == "income").count();
    let expense = categories.iter().filter(|c| c["kind"] == "expense").count();
    assert_eq!(income, 2);
    assert_eq!(expense, 4);

    // Ordered by name for stable presentation.
    let names: Vec<&str> = categories.iter().map(|c| c["name"].as_str().unwrap()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn test_owner_is_forced_to_caller() {
    let app = TestApp::new().await;

    // The payload carries no owner field; the caller always becomes owner.
    let (status, body) = app
        .request(
            "POST",
            "/api/v1/companies",
            Some("user-x"),
            Some(json!({ "name": "X Corp", "currency": "EUR", "tax_rate": 0.19 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["owner_id"], "user-x");
    assert_eq!(body["currency"], "EUR");
    assert_eq!(body["tax_rate"], 0.19);
}

#[tokio::test]
async fn test_list_companies_is_owned_union_member_without_duplicates() {
    let app = TestApp::new().await;

    let own = app.create_company("user-a", "Alpha Books").await;
    let own_id = own["id"].as_str().unwrap().to_string();

    let other = app.create_company("user-b", "Beta Books").await;
    let other_id = other["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .request(
            "POST",
            &format!("/api/v1/companies/{}/members", other_id),
            Some("user-b"),
            Some(json!({ "user_id": "user-a" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.request("GET", "/api/v1/companies", Some("user-a"), None).await;
    assert_eq!(status, StatusCode::OK);

    let companies = body.as_array().unwrap();
    assert_eq!(companies.len(), 2);

    let mut ids: Vec<&str> = companies.iter().map(|c| c["id"].as_str().unwrap()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&own_id.as_str()));
    assert!(ids.contains(&other_id.as_str()));

    // user-b only sees their own company.
    let (_, body) = app.request("GET", "/api/v1/companies", Some("user-b"), None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_company_hides_existence_from_outsiders() {
    let app = TestApp::new().await;

    let company = app.create_company("user-a", "Alpha Books").await;
    let company_id = company["id"].as_str().unwrap();

    let (status, body) = app
        .request("GET", &format!("/api/v1/companies/{}", company_id), Some("user-a"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alpha Books");

    let (status, _) = app
        .request("GET", &format!("/api/v1/companies/{}", company_id), Some("user-b"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .request("GET", "/api/v1/companies/missing", Some("user-a"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_upsert_by_id() {
    let app = TestApp::new().await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/v1/auth/user")
        .header("X-User-Id", "user-a")
        .header("X-User-Email", "a@example.com")
        .header("X-User-First-Name", "Ada")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let first: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(first["email"], "a@example.com");
    assert_eq!(first["first_name"], "Ada");

    // Same id, new email: the row is updated in place, created_at sticks.
    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/v1/auth/user")
        .header("X-User-Id", "user-a")
        .header("X-User-Email", "new@example.com")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), request).await.unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let second: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(second["id"], "user-a");
    assert_eq!(second["email"], "new@example.com");
    assert_eq!(second["created_at"], first["created_at"]);
}
