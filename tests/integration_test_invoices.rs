mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

async fn seed(app: &TestApp) -> (String, String) {
    let company = app.create_company("user-a", "Alpha Books").await;
    let company_id = company["id"].as_str().unwrap().to_string();
    let client = app.create_client("user-a", &company_id, "Acme Ltd").await;
    (company_id, client["id"].as_str().unwrap().to_string())
}

#[tokio::test]
async fn test_create_invoice_with_items_and_fetch_details() {
    let app = TestApp::new().await;
    let (company_id, client_id) = seed(&app).await;

    let (status, invoice) = app
        .request(
            "POST",
            "/api/v1/invoices",
            Some("user-a"),
            Some(json!({
                "invoice": {
                    "company_id": company_id,
                    "invoice_number": "INV-001",
                    "status": "sent",
                    "client_id": client_id,
                    "issue_date": "2024-03-01",
                    "due_date": "2024-03-31",
                    "subtotal": 900.0,
                    "tax_amount": 90.0,
                    "notes": "Net 30"
                },
                "items": [
                    { "description": "Design work", "quantity": 10.0, "unit_price": 60.0, "total": 600.0 },
                    { "description": "Hosting", "quantity": 1.0, "unit_price": 300.0, "total": 300.0 }
                ]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let invoice_id = invoice["id"].as_str().unwrap().to_string();
    // Total is derived once at creation: subtotal + tax.
    assert_eq!(invoice["total"], 990.0);

    let (status, details) = app
        .request(
            "GET",
            &format!("/api/v1/invoices/{}/details", invoice_id),
            Some("user-a"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(details["invoice_number"], "INV-001");
    assert_eq!(details["total"], 990.0);
    assert_eq!(details["client_name"], "Acme Ltd");

    let items = details["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item["invoice_id"] == invoice_id));
}

#[tokio::test]
async fn test_invoice_number_unique_per_company() {
    let app = TestApp::new().await;
    let (company_id, client_id) = seed(&app).await;

    let payload = |company: &str, client: &str| {
        json!({
            "invoice": {
                "company_id": company,
                "invoice_number": "INV-001",
                "client_id": client,
                "issue_date": "2024-03-01",
                "due_date": "2024-03-31",
                "subtotal": 100.0,
                "tax_amount": 0.0
            },
            "items": []
        })
    };

    let (status, _) = app
        .request("POST", "/api/v1/invoices", Some("user-a"), Some(payload(&company_id, &client_id)))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request("POST", "/api/v1/invoices", Some("user-a"), Some(payload(&company_id, &client_id)))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // The same number is fine in a different company.
    let other = app.create_company("user-a", "Alpha Holdings").await;
    let other_id = other["id"].as_str().unwrap().to_string();
    let other_client = app.create_client("user-a", &other_id, "Acme Ltd").await;
    let (status, _) = app
        .request(
            "POST",
            "/api/v1/invoices",
            Some("user-a"),
            Some(payload(&other_id, other_client["id"].as_str().unwrap())),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // The failed duplicate left no stray items or headers behind.
    let (_, invoices) = app
        .request(
            "GET",
            &format!("/api/v1/companies/{}/invoices", company_id),
            Some("user-a"),
            None,
        )
        .await;
    assert_eq!(invoices.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_invoices_with_client_summary() {
    let app = TestApp::new().await;
    let (company_id, client_id) = seed(&app).await;

    for number in ["INV-001", "INV-002"] {
        let (status, _) = app
            .request(
                "POST",
                "/api/v1/invoices",
                Some("user-a"),
                Some(json!({
                    "invoice": {
                        "company_id": company_id,
                        "invoice_number": number,
                        "client_id": client_id,
                        "issue_date": "2024-03-01",
                        "due_date": "2024-03-31",
                        "subtotal": 100.0,
                        "tax_amount": 10.0
                    },
                    "items": []
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/v1/companies/{}/invoices", company_id),
            Some("user-a"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let invoices = body.as_array().unwrap();
    assert_eq!(invoices.len(), 2);
    // Newest first.
    assert_eq!(invoices[0]["invoice_number"], "INV-002");
    assert!(invoices.iter().all(|i| i["client_name"] == "Acme Ltd"));
}

#[tokio::test]
async fn test_invoice_details_are_hidden_from_outsiders() {
    let app = TestApp::new().await;
    let (company_id, client_id) = seed(&app).await;

    let (_, invoice) = app
        .request(
            "POST",
            "/api/v1/invoices",
            Some("user-a"),
            Some(json!({
                "invoice": {
                    "company_id": company_id,
                    "invoice_number": "INV-001",
                    "client_id": client_id,
                    "issue_date": "2024-03-01",
                    "due_date": "2024-03-31",
                    "subtotal": 100.0,
                    "tax_amount": 0.0
                },
                "items": []
            })),
        )
        .await;
    let invoice_id = invoice["id"].as_str().unwrap();

    // Denied and missing are indistinguishable.
    let (status, _) = app
        .request("GET", &format!("/api/v1/invoices/{}/details", invoice_id), Some("user-b"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request("GET", "/api/v1/invoices/no-such-invoice/details", Some("user-a"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_invoice_requires_access_and_sane_amounts() {
    let app = TestApp::new().await;
    let (company_id, client_id) = seed(&app).await;

    let (status, _) = app
        .request(
            "POST",
            "/api/v1/invoices",
            Some("user-b"),
            Some(json!({
                "invoice": {
                    "company_id": company_id,
                    "invoice_number": "INV-900",
                    "client_id": client_id,
                    "issue_date": "2024-03-01",
                    "due_date": "2024-03-31",
                    "subtotal": 100.0,
                    "tax_amount": 0.0
                },
                "items": []
            })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request(
            "POST",
            "/api/v1/invoices",
            Some("user-a"),
            Some(json!({
                "invoice": {
                    "company_id": company_id,
                    "invoice_number": "INV-901",
                    "client_id": client_id,
                    "issue_date": "2024-03-01",
                    "due_date": "2024-03-31",
                    "subtotal": -100.0,
                    "tax_amount": 0.0
                },
                "items": []
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
