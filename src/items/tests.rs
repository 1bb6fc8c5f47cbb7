use super::models::{self, ItemPayload};
use crate::config::test_helpers::{send, setup_failing_app, setup_test_app};
use axum::http::StatusCode;
use rstest::rstest;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::{Value, json};

fn item_json() -> Value {
    json!({
        "name": "Hammer drill",
        "manufacturer": "Bosch",
        "identifier": "SN-4471",
        "responsible_person": "Dana",
        "project_id": 2,
        "order_date": "2024-01-15",
        "last_storage_date": "2024-06-01",
        "current_user_id": 5,
        "guarantee": "2 years"
    })
}

fn stored_item(id: i64, payload: &Value) -> Value {
    let mut row = payload.clone();
    row["id"] = json!(id);
    row
}

#[tokio::test]
async fn test_item_create_list_and_get() {
    let app = setup_test_app().await;

    let (status, body) = send(&app, "POST", "/items", Some(item_json())).await;
    assert_eq!(status, StatusCode::CREATED, "Failed to create item: {body:?}");
    assert_eq!(body, "Item added");

    let (status, body) = send(&app, "GET", "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([stored_item(1, &item_json())]));

    let (status, body) = send(&app, "GET", "/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([stored_item(1, &item_json())]));
}

#[tokio::test]
async fn test_item_not_found() {
    let app = setup_test_app().await;

    let (status, body) = send(&app, "GET", "/items/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Item not found"}));
}

#[rstest]
#[case("name")]
#[case("manufacturer")]
#[case("identifier")]
#[case("responsible_person")]
#[case("project_id")]
#[case("order_date")]
#[case("last_storage_date")]
#[case("current_user_id")]
#[case("guarantee")]
#[tokio::test]
async fn test_item_create_rejects_missing_field(#[case] field: &str) {
    let app = setup_test_app().await;
    let mut payload = item_json();
    payload.as_object_mut().unwrap().remove(field);

    let (status, body) = send(&app, "POST", "/items", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{field} should be required");
    assert_eq!(body, json!({"error": "All fields are required"}));

    let (_, body) = send(&app, "GET", "/items", None).await;
    assert_eq!(body, json!([]));
}

#[rstest]
#[case::zero_project("project_id", json!(0))]
#[case::zero_user("current_user_id", json!(0))]
#[case::empty_guarantee("guarantee", json!(""))]
#[tokio::test]
async fn test_item_create_rejects_falsy_values(#[case] field: &str, #[case] value: Value) {
    let app = setup_test_app().await;
    let mut payload = item_json();
    payload[field] = value;

    let (status, body) = send(&app, "POST", "/items", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "All fields are required"}));
}

#[tokio::test]
async fn test_item_update_overwrites_every_column() {
    let app = setup_test_app().await;
    send(&app, "POST", "/items", Some(item_json())).await;

    let replacement = json!({
        "name": "Hammer drill",
        "manufacturer": "Bosch",
        "identifier": "SN-4471",
        "responsible_person": "Eli",
        "project_id": 3,
        "order_date": "2024-01-15",
        "last_storage_date": "2024-09-12",
        "current_user_id": 6,
        "guarantee": "2 years"
    });
    let (status, body) = send(&app, "PUT", "/items/1", Some(replacement.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Item updated");

    let (_, body) = send(&app, "GET", "/items/1", None).await;
    assert_eq!(body, json!([stored_item(1, &replacement)]));
}

#[tokio::test]
async fn test_item_update_does_not_validate() {
    let app = setup_test_app().await;
    send(&app, "POST", "/items", Some(item_json())).await;

    let (status, _) = send(&app, "PUT", "/items/1", Some(json!({"name": "Crowbar"}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/items/1", None).await;
    assert_eq!(body[0]["name"], "Crowbar");
    assert!(body[0]["manufacturer"].is_null());
    assert!(body[0]["project_id"].is_null());
}

// Unknown ids are answered with 200, not 404, for both update and delete.
#[tokio::test]
async fn test_item_update_unknown_id_still_succeeds() {
    let app = setup_test_app().await;
    send(&app, "POST", "/items", Some(item_json())).await;

    let (status, body) = send(&app, "PUT", "/items/42", Some(item_json())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Item updated");

    let (status, _) = send(&app, "PUT", "/items/abc", Some(item_json())).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/items", None).await;
    assert_eq!(body, json!([stored_item(1, &item_json())]));
}

#[tokio::test]
async fn test_item_delete_is_idempotent() {
    let app = setup_test_app().await;
    send(&app, "POST", "/items", Some(item_json())).await;

    for _ in 0..2 {
        let (status, body) = send(&app, "DELETE", "/items/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Item deleted");
    }

    let (status, _) = send(&app, "GET", "/items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_item_delete_leaves_usage_rows() {
    let app = setup_test_app().await;
    send(&app, "POST", "/items", Some(item_json())).await;
    let usage = json!({"item_id": 1, "user_id": 5, "start_date": "2024-02-01", "end_date": "2024-02-10"});
    send(&app, "POST", "/item-usage", Some(usage)).await;

    let (status, _) = send(&app, "DELETE", "/items/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/item-usage/1", None).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_item_database_failure() {
    // POST, PUT and DELETE write; the two GETs read
    let app = setup_failing_app(3, 2);

    for (method, uri, body) in [
        ("POST", "/items", Some(item_json())),
        ("GET", "/items", None),
        ("GET", "/items/1", None),
        ("PUT", "/items/1", Some(item_json())),
        ("DELETE", "/items/1", None),
    ] {
        let (status, body) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
        assert_eq!(body, json!({"error": "Database error"}));
    }
}

#[tokio::test]
async fn test_item_update_is_one_bound_statement() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let payload: ItemPayload = serde_json::from_value(item_json()).unwrap();
    let affected = models::update(&db, 9, payload.into_replacement())
        .await
        .unwrap();
    assert_eq!(affected, 0);

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
    let statements = log[0].statements();
    assert_eq!(statements.len(), 1);
    assert!(statements[0].sql.starts_with("UPDATE `items` SET"));
    // Nine columns plus the id
    assert_eq!(statements[0].sql.matches('?').count(), 10);
    assert!(!statements[0].sql.contains("Hammer drill"));
}
