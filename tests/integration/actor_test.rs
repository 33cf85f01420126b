//! Integration tests for listing and editing actors.

use axum::http::{Method, StatusCode, header};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_pagination_against_postgres() {
    let Some(app) = TestApp::new(120).await else { return };

    for (page, per_page) in [(1, 25), (2, 25), (5, 25), (2, 100), (13, 10)] {
        let json = app
            .json(&format!("/api/actors?page={page}&per_page={per_page}"))
            .await;
        let items = json["data"]["items"].as_array().unwrap();
        assert!(items.len() <= per_page as usize);
        assert_eq!(json["data"]["total"], 120);
        if let Some(first) = items.first() {
            assert_eq!(first["actor_id"], per_page * (page - 1) + 1);
        }
    }

    let json = app.json("/api/actors?page=0&per_page=1000").await;
    assert_eq!(json["data"]["page"], 1);
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 100);
}

#[tokio::test]
async fn test_huge_page_against_postgres() {
    let Some(app) = TestApp::new(3).await else { return };

    let response = app
        .request(Method::GET, "/actors/?page=100000000000000000&per_page=100", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let json = app.json("/api/actors?page=100000000000000000&per_page=100").await;
    assert!(json["data"]["items"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["total"], 3);
}

#[tokio::test]
async fn test_sort_against_postgres() {
    let Some(app) = TestApp::new(10).await else { return };

    let json = app.json("/api/actors?sort=last_name").await;
    assert_eq!(json["data"]["items"][0]["actor_id"], 10);

    let json = app.json("/api/actors?sort=-first_name").await;
    assert_eq!(json["data"]["items"][0]["first_name"], "FIRST010");

    let json = app.json("/api/actors?sort=drop%20table").await;
    assert_eq!(json["data"]["items"][0]["actor_id"], 1);
}

#[tokio::test]
async fn test_edit_against_postgres() {
    let Some(app) = TestApp::new(3).await else { return };

    let response = app
        .request(Method::POST, "/actors/3/edit/", Some("last_name=BERGEN"))
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.headers[header::LOCATION], "/actors/3/");

    let (first, last): (String, String) =
        sqlx::query_as("SELECT first_name, last_name FROM actor WHERE actor_id = 3")
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(first, "FIRST003");
    assert_eq!(last, "BERGEN");

    let response = app
        .request(Method::POST, "/actors/99/edit/", Some("last_name=NOBODY"))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_name_length_against_postgres() {
    let Some(app) = TestApp::new(1).await else { return };

    let longest = "Ä".repeat(45);
    let response = app
        .request(Method::POST, "/actors/1/edit/", Some(&format!("first_name={longest}")))
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let response = app
        .request(Method::POST, "/actors/1/edit/", Some(&format!("first_name={}", "X".repeat(46))))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let first: String = sqlx::query_scalar("SELECT first_name FROM actor WHERE actor_id = 1")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(first, longest);
}
