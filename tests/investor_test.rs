mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::factory::wallet_address;
use common::{Factory, TestApp};

#[tokio::test]
async fn test_list_investors_empty() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let project = factory.create_project().await;

    let response = app
        .server
        .get(&format!("/api/v1/projects/{}/investors", project.id))
        .await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["investors"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_add_investor() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let project = factory.create_project().await;
    let investor = wallet_address();

    let response = app
        .server
        .post(&format!("/api/v1/projects/{}/investors", project.id))
        .json(&json!({"wallet_address": investor}))
        .await;

    response.assert_status(StatusCode::OK);

    let list: serde_json::Value = app
        .server
        .get(&format!("/api/v1/projects/{}/investors", project.id))
        .await
        .json();
    let investors = list["investors"].as_array().unwrap();
    assert_eq!(investors.len(), 1);
    assert_eq!(investors[0].as_str().unwrap(), investor);
}

#[tokio::test]
async fn test_add_same_investor_twice_conflicts() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let project = factory.create_project().await;
    let investor = wallet_address();

    let first = app
        .server
        .post(&format!("/api/v1/projects/{}/investors", project.id))
        .json(&json!({"wallet_address": investor}))
        .await;
    first.assert_status(StatusCode::OK);

    let second = app
        .server
        .post(&format!("/api/v1/projects/{}/investors", project.id))
        .json(&json!({"wallet_address": investor}))
        .await;
    second.assert_status(StatusCode::CONFLICT);

    // The list is undisturbed
    let list: serde_json::Value = app
        .server
        .get(&format!("/api/v1/projects/{}/investors", project.id))
        .await
        .json();
    assert_eq!(list["investors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_investor_invalid_address() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let project = factory.create_project().await;

    let response = app
        .server
        .post(&format!("/api/v1/projects/{}/investors", project.id))
        .json(&json!({"wallet_address": "nope"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_investor_project_not_found() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post(&format!("/api/v1/projects/{}/investors", Uuid::now_v7()))
        .json(&json!({"wallet_address": wallet_address()}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_investors_preserves_order() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let project = factory.create_project().await;
    let first = wallet_address();
    let second = wallet_address();

    for investor in [&first, &second] {
        app.server
            .post(&format!("/api/v1/projects/{}/investors", project.id))
            .json(&json!({"wallet_address": investor}))
            .await
            .assert_status(StatusCode::OK);
    }

    let list: serde_json::Value = app
        .server
        .get(&format!("/api/v1/projects/{}/investors", project.id))
        .await
        .json();
    let investors = list["investors"].as_array().unwrap();
    assert_eq!(investors[0].as_str().unwrap(), first);
    assert_eq!(investors[1].as_str().unwrap(), second);
}

#[tokio::test]
async fn test_remove_investor_is_idempotent() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let project = factory.create_project().await;
    let investor = wallet_address();

    app.server
        .post(&format!("/api/v1/projects/{}/investors", project.id))
        .json(&json!({"wallet_address": investor}))
        .await
        .assert_status(StatusCode::OK);

    let first = app
        .server
        .delete(&format!(
            "/api/v1/projects/{}/investors/{}",
            project.id, investor
        ))
        .await;
    first.assert_status(StatusCode::OK);

    // Removing an absent address succeeds too
    let second = app
        .server
        .delete(&format!(
            "/api/v1/projects/{}/investors/{}",
            project.id, investor
        ))
        .await;
    second.assert_status(StatusCode::OK);

    let list: serde_json::Value = app
        .server
        .get(&format!("/api/v1/projects/{}/investors", project.id))
        .await
        .json();
    assert_eq!(list["investors"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_remove_investor_project_not_found() {
    let app = TestApp::new().await;

    let response = app
        .server
        .delete(&format!(
            "/api/v1/projects/{}/investors/{}",
            Uuid::now_v7(),
            wallet_address()
        ))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_leaves_other_investors_untouched() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let project = factory.create_project().await;
    let keep = wallet_address();
    let remove = wallet_address();

    for investor in [&keep, &remove] {
        app.server
            .post(&format!("/api/v1/projects/{}/investors", project.id))
            .json(&json!({"wallet_address": investor}))
            .await
            .assert_status(StatusCode::OK);
    }

    app.server
        .delete(&format!(
            "/api/v1/projects/{}/investors/{}",
            project.id, remove
        ))
        .await
        .assert_status(StatusCode::OK);

    let list: serde_json::Value = app
        .server
        .get(&format!("/api/v1/projects/{}/investors", project.id))
        .await
        .json();
    let investors = list["investors"].as_array().unwrap();
    assert_eq!(investors.len(), 1);
    assert_eq!(investors[0].as_str().unwrap(), keep);
}

#[tokio::test]
async fn test_full_investor_scenario() {
    // POST project, empty investor list, add once, duplicate conflicts
    let app = TestApp::new().await;

    let creator = format!("0x{}", "a".repeat(40));
    let response = app
        .server
        .post("/api/v1/projects")
        .json(&json!({"creator_wallet_address": creator, "title": "Test"}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    let id = created["id"].as_str().unwrap().to_string();

    let investors: serde_json::Value = app
        .server
        .get(&format!("/api/v1/projects/{}/investors", id))
        .await
        .json();
    assert_eq!(investors["investors"].as_array().unwrap().len(), 0);

    let investor = format!("0x{}", "b".repeat(40));
    app.server
        .post(&format!("/api/v1/projects/{}/investors", id))
        .json(&json!({"wallet_address": investor}))
        .await
        .assert_status(StatusCode::OK);

    app.server
        .post(&format!("/api/v1/projects/{}/investors", id))
        .json(&json!({"wallet_address": investor}))
        .await
        .assert_status(StatusCode::CONFLICT);
}
