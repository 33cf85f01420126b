//! Integration tests for bulk exports.

use std::io::{Cursor, Read};

use axum::http::{Method, StatusCode};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_csv_export_against_postgres() {
    let Some(app) = TestApp::new(250).await else { return };

    let response = app.request(Method::GET, "/actors/export/csv/", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let text = response.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 251);
    assert_eq!(lines[0], "ID,First name,Last name,Last update");
    assert_eq!(lines[250], "250,FIRST250,LAST001,15.02.2006 04:34:33");
}

#[tokio::test]
async fn test_xlsx_export_against_postgres() {
    let Some(app) = TestApp::new(40).await else { return };

    let response = app.request(Method::GET, "/actors/export/xlsx/", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let mut archive = zip::ZipArchive::new(Cursor::new(response.body)).unwrap();
    let mut sheet = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .unwrap()
        .read_to_string(&mut sheet)
        .unwrap();
    assert_eq!(sheet.matches("<row ").count(), 41);
}
