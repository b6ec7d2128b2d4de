mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{parse_body, TestApp};
use invitation_backend::domain::models::guest::GuestRecord;
use serde_json::json;

async fn seed_guest(app: &TestApp, name: &str, minutes_ago: i64) -> GuestRecord {
    let mut guest = GuestRecord::new(name.to_string(), format!("https://wedding.test/?to={}", name.to_lowercase()));
    guest.created_at = Utc::now() - Duration::minutes(minutes_ago);
    guest.updated_at = guest.created_at;
    app.state.guest_repo.create(&guest).await.unwrap()
}

#[tokio::test]
async fn test_create_guest_trims_and_returns_created() {
    let app = TestApp::new().await;

    let res = app.request("POST", "/api/guests", Some(json!({
        "name": "  Budi Santoso  ",
        "inviteLink": " https://wedding.test/?to=budi-santoso "
    }))).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    let guest = &body["data"];
    assert_eq!(guest["name"], "Budi Santoso");
    assert_eq!(guest["inviteLink"], "https://wedding.test/?to=budi-santoso");
    assert!(guest["id"].as_str().is_some());
    assert!(guest["createdAt"].as_str().is_some());
    assert!(guest["updatedAt"].as_str().is_some());
}

#[tokio::test]
async fn test_create_guest_validation() {
    let app = TestApp::new().await;

    let res = app.request("POST", "/api/guests", Some(json!({"name": "B", "inviteLink": ""}))).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = parse_body(res).await;
    assert_eq!(
        body["error"],
        "Guest name is required (at least 2 characters). Invitation link is required."
    );

    let res = app.request("POST", "/api/guests", Some(json!({"name": 42, "inviteLink": "x"}))).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = app.raw_post("/api/guests", "{oops").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["error"], "Invalid payload.");

    let list = parse_body(app.request("GET", "/api/guests", None).await).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_guests_newest_first_and_name_filter() {
    let app = TestApp::new().await;

    let old_ana = seed_guest(&app, "Ana", 30).await;
    seed_guest(&app, "Budi", 20).await;
    let new_ana = seed_guest(&app, "ana", 10).await;

    let res = app.request("GET", "/api/guests", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let names: Vec<&str> = body["data"].as_array().unwrap().iter().map(|g| g["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["ana", "Budi", "Ana"]);

    let filtered = parse_body(app.request("GET", "/api/guests?name=ANA", None).await).await;
    let filtered = filtered["data"].as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["id"], new_ana.id.as_str());
    assert_ne!(filtered[0]["id"], old_ana.id.as_str());

    let none = parse_body(app.request("GET", "/api/guests?name=Anastasia", None).await).await;
    assert!(none["data"].as_array().unwrap().is_empty());

    let blank = parse_body(app.request("GET", "/api/guests?name=", None).await).await;
    assert_eq!(blank["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_name_filter_folds_non_ascii_letters() {
    let app = TestApp::new().await;
    let jose = seed_guest(&app, "José", 5).await;
    seed_guest(&app, "Jose", 1).await;

    let res = app.request("GET", "/api/guests?name=JOS%C3%89", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let found = body["data"].as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], jose.id.as_str());
    assert_eq!(found[0]["name"], "José");
}

#[tokio::test]
async fn test_delete_guest() {
    let app = TestApp::new().await;
    let guest = seed_guest(&app, "Siti", 1).await;

    let res = app.request("DELETE", &format!("/api/guests/{}", guest.id), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["success"], true);

    let res = app.request("DELETE", &format!("/api/guests/{}", guest.id), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let list = parse_body(app.request("GET", "/api/guests", None).await).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}
