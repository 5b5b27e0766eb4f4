//! Integration tests for the versioned document controllers.

use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use document_api::config::ServiceConfig;

mod common;

#[tokio::test]
async fn test_v1_list_returns_bare_array_sorted_by_path() {
    let service = common::start_service(ServiceConfig::default(), common::sample_documents()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(service.url("/api/v1.0.0/document"))
        .send()
        .await
        .expect("Service unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let documents = body.as_array().unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["path"], "/files/alpha.txt");
    assert_eq!(documents[1]["path"], "/files/beta.txt");

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_v1_get_by_id() {
    let service = common::start_service(ServiceConfig::default(), common::sample_documents()).await;
    let client = reqwest::Client::new();
    let id = service.document_ids[0];

    let res = client
        .get(service.url(&format!("/api/v1.0.0/document/{id}")))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], id.to_string());

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_v1_missing_document_is_legacy_notfound_string() {
    let service = common::start_service(ServiceConfig::default(), common::sample_documents()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(service.url(&format!("/api/v1.0.0/document/{}", Uuid::new_v4())))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, Value::String("NotFound".into()));

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_v2_list_wraps_in_data_envelope() {
    let service = common::start_service(ServiceConfig::default(), common::sample_documents()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(service.url("/api/v2.0.0/document"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_v2_get_by_id() {
    let service = common::start_service(ServiceConfig::default(), common::sample_documents()).await;
    let client = reqwest::Client::new();
    let id = service.document_ids[1];

    let res = client
        .get(service.url(&format!("/api/v2.0.0/document/{id}")))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["id"], id.to_string());

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_v2_missing_document_envelope() {
    let service = common::start_service(ServiceConfig::default(), common::sample_documents()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(service.url(&format!("/api/v2.0.0/document/{}", Uuid::new_v4())))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["error"], "The specified document was not found");

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_malformed_id_maps_to_not_found_shape() {
    let service = common::start_service(ServiceConfig::default(), common::sample_documents()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(service.url("/api/v1.0.0/document/not-a-uuid"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, Value::String("NotFound".into()));

    let res = client
        .get(service.url("/api/v2.0.0/document/not-a-uuid"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"], Value::Null);

    service.shutdown.trigger();
}

#[tokio::test]
async fn test_empty_store_lists_empty() {
    let service = common::start_service(ServiceConfig::default(), Vec::new()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(service.url("/api/v1.0.0/document"))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 0);

    service.shutdown.trigger();
}
