//! Admin pricing plan CRUD: form transform on the wire, re-fetch after
//! every mutation, and the destructive-delete confirmation contract.

#![allow(clippy::unwrap_used)]

use insights_snap_client::{ApiClient, ApiError, Notification, PlanForm};
use insights_snap_core::{BillingPeriod, OkResponse, Scope};
use insights_snap_integration_tests::TestContext;
use mockito::Matcher;
use uuid::Uuid;

const PLAN_BODY: &str = r#"{
    "id": "8f14e45f-ceea-467f-a0f9-b0f1a64d32f1",
    "name": "Pro",
    "description": "For growing teams",
    "price": 19.99,
    "billing": "month",
    "features": ["A", "B", "C"],
    "searchesPerDay": -1,
    "aiGenerations": 50,
    "exportsPerMonth": 20,
    "resultsPerCategory": 10,
    "isPopular": true,
    "isActive": true
}"#;

fn pro_form() -> PlanForm {
    PlanForm {
        name: "Pro".to_string(),
        description: "For growing teams".to_string(),
        price: "19.99".to_string(),
        billing: BillingPeriod::Month,
        trial_info: String::new(),
        features: "A\nB\n\nC".to_string(),
        searches_per_day: "-1".to_string(),
        ai_generations: "50".to_string(),
        exports_per_month: "20".to_string(),
        results_per_category: "10".to_string(),
        is_popular: true,
        is_active: true,
    }
}

/// The delete button's flow: confirmation gates the request entirely.
async fn delete_plan_page(
    client: &ApiClient,
    id: Uuid,
    confirmed: bool,
) -> Option<Result<OkResponse, ApiError>> {
    if !confirmed {
        return None;
    }
    Some(client.admin_delete_plan(id).await)
}

#[tokio::test]
async fn create_sends_transformed_form_and_refetches_list() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/api/admin/pricing")
        .match_header("authorization", "Bearer admin-tok")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "name": "Pro",
            "features": ["A", "B", "C"],
            "searchesPerDay": -1
        })))
        .with_status(200)
        .with_body(PLAN_BODY)
        .create_async()
        .await;
    let refetch = server
        .mock("GET", "/api/admin/pricing")
        .match_header("authorization", "Bearer admin-tok")
        .with_status(200)
        .with_body(format!("[{PLAN_BODY}]"))
        .create_async()
        .await;

    let ctx = TestContext::new(&server.url());
    ctx.sign_in(Scope::Admin, "admin-tok");

    // Blank line in the textarea is dropped; order is preserved.
    let payload = pro_form().into_payload().unwrap();
    assert_eq!(payload.features, vec!["A", "B", "C"]);

    ctx.client.admin_create_plan(&payload).await.unwrap();
    let plans = ctx.client.admin_plans().await.unwrap();

    assert_eq!(plans.len(), 1);
    assert_eq!(plans.first().unwrap().name, "Pro");
    create.assert_async().await;
    refetch.assert_async().await;
}

#[tokio::test]
async fn update_by_id_then_refetch() {
    let id: Uuid = "8f14e45f-ceea-467f-a0f9-b0f1a64d32f1".parse().unwrap();

    let mut server = mockito::Server::new_async().await;
    let update = server
        .mock("PUT", format!("/api/admin/pricing/{id}").as_str())
        .match_header("authorization", "Bearer admin-tok")
        .with_status(200)
        .with_body(r#"{ "success": true, "id": "8f14e45f-ceea-467f-a0f9-b0f1a64d32f1" }"#)
        .create_async()
        .await;
    let refetch = server
        .mock("GET", "/api/admin/pricing")
        .with_status(200)
        .with_body(format!("[{PLAN_BODY}]"))
        .create_async()
        .await;

    let ctx = TestContext::new(&server.url());
    ctx.sign_in(Scope::Admin, "admin-tok");

    let payload = pro_form().into_payload().unwrap();
    let resp = ctx.client.admin_update_plan(id, &payload).await.unwrap();
    assert!(resp.success);

    ctx.client.admin_plans().await.unwrap();
    update.assert_async().await;
    refetch.assert_async().await;
}

#[tokio::test]
async fn declined_confirmation_issues_zero_delete_requests() {
    let id = Uuid::new_v4();

    let mut server = mockito::Server::new_async().await;
    let delete = server
        .mock("DELETE", format!("/api/admin/pricing/{id}").as_str())
        .expect(0)
        .create_async()
        .await;

    let ctx = TestContext::new(&server.url());
    ctx.sign_in(Scope::Admin, "admin-tok");

    let result = delete_plan_page(&ctx.client, id, false).await;

    assert!(result.is_none());
    delete.assert_async().await;
}

#[tokio::test]
async fn confirmed_delete_issues_the_request_and_refetches() {
    let id = Uuid::new_v4();

    let mut server = mockito::Server::new_async().await;
    let delete = server
        .mock("DELETE", format!("/api/admin/pricing/{id}").as_str())
        .match_header("authorization", "Bearer admin-tok")
        .with_status(200)
        .with_body(r#"{ "success": true }"#)
        .create_async()
        .await;
    let refetch = server
        .mock("GET", "/api/admin/pricing")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let ctx = TestContext::new(&server.url());
    ctx.sign_in(Scope::Admin, "admin-tok");

    let result = delete_plan_page(&ctx.client, id, true).await.unwrap().unwrap();
    assert!(result.success);

    let plans = ctx.client.admin_plans().await.unwrap();
    assert!(plans.is_empty());
    delete.assert_async().await;
    refetch.assert_async().await;
}

#[tokio::test]
async fn rejected_save_surfaces_detail_through_the_notification() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/admin/pricing")
        .with_status(422)
        .with_body(r#"{ "detail": "price must be non-negative" }"#)
        .create_async()
        .await;

    let ctx = TestContext::new(&server.url());
    ctx.sign_in(Scope::Admin, "admin-tok");

    let payload = pro_form().into_payload().unwrap();
    let err = ctx.client.admin_create_plan(&payload).await.unwrap_err();

    let note = Notification::for_error(&err, "Failed to save plan");
    assert_eq!(note.message, "price must be non-negative");
}
