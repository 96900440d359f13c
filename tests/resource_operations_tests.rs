//! Integration tests for the space and context operations.

use serde_json::{json, Value};
use spacelift::{ConfigVariable, ContextInput, SpaceInput, Spacelift, SpaceliftConfig, SpaceliftError};
use wiremock::matchers::{body_partial_json, body_string_contains, method};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Creates a client whose API key exchange always succeeds
async fn create_authenticated_client(server: &MockServer) -> Spacelift {
    Mock::given(method("POST"))
        .and(body_string_contains("apiKeyUser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"apiKeyUser": {"id": "api::key", "jwt": "jwt-1"}}
        })))
        .mount(server)
        .await;

    let config = SpaceliftConfig::builder()
        .base_url(format!("{}/graphql", server.uri()))
        .key_id("key")
        .key_secret("secret")
        .build()
        .unwrap();
    Spacelift::new(config).unwrap()
}

async fn respond_to(server: &MockServer, needle: &str, data: Value) {
    Mock::given(method("POST"))
        .and(body_string_contains(needle))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .expect(1)
        .mount(server)
        .await;
}

async fn last_request_body(server: &MockServer) -> Value {
    let requests: Vec<Request> = server.received_requests().await.unwrap();
    serde_json::from_slice(&requests.last().unwrap().body).unwrap()
}

// ============================================================================
// Spaces
// ============================================================================

#[tokio::test]
async fn test_get_spaces_default_fields() {
    let server = MockServer::start().await;
    let client = create_authenticated_client(&server).await;
    respond_to(
        &server,
        "query Spaces",
        json!({"spaces": [{"id": "root", "name": "root"}, {"id": "dev-01H", "name": "dev"}]}),
    )
    .await;

    let spaces = client.get_spaces(None).await.unwrap();

    assert_eq!(spaces.len(), 2);
    assert_eq!(spaces[1]["name"], "dev");
    assert_eq!(
        last_request_body(&server).await["query"],
        "query Spaces { spaces { id name } }"
    );
}

#[tokio::test]
async fn test_get_space_by_id_with_nested_selection() {
    let server = MockServer::start().await;
    let client = create_authenticated_client(&server).await;
    respond_to(
        &server,
        "query Space(",
        json!({"space": {"id": "dev-01H", "parentSpace": "root"}}),
    )
    .await;

    let fields = ["id", "parentSpace"];
    let space = client
        .get_space_by_id("dev-01H", Some(&fields[..]))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(space["parentSpace"], "root");
    let body = last_request_body(&server).await;
    assert_eq!(
        body["query"],
        "query Space($id: ID!) { space(id: $id) { id parentSpace } }"
    );
    assert_eq!(body["variables"]["id"], "dev-01H");
}

#[tokio::test]
async fn test_create_space_sends_input() {
    let server = MockServer::start().await;
    let client = create_authenticated_client(&server).await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"input": {"name": "networking", "parentSpace": "root", "inheritEntities": true}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"spaceCreate": {"id": "networking-01H", "name": "networking"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let input = SpaceInput::new("networking", "root")
        .description("Shared VPCs")
        .inherit_entities(true);
    let space = client.create_space(&input).await.unwrap();

    assert_eq!(space["id"], "networking-01H");
}

#[tokio::test]
async fn test_delete_space_returns_id() {
    let server = MockServer::start().await;
    let client = create_authenticated_client(&server).await;
    respond_to(&server, "spaceDelete", json!({"spaceDelete": {"id": "dev-01H"}})).await;

    let deleted = client.delete_space("dev-01H").await.unwrap();

    assert_eq!(deleted.as_deref(), Some("dev-01H"));
    assert_eq!(
        last_request_body(&server).await["variables"],
        json!({"space": "dev-01H"})
    );
}

// ============================================================================
// Contexts
// ============================================================================

#[tokio::test]
async fn test_get_contexts_custom_fields() {
    let server = MockServer::start().await;
    let client = create_authenticated_client(&server).await;
    respond_to(
        &server,
        "query Contexts",
        json!({"contexts": [{"id": "aws", "config": [{"id": "AWS_REGION", "value": "eu-west-1"}]}]}),
    )
    .await;

    let fields = ["id", "config { id value }"];
    let contexts = client.get_contexts(Some(&fields[..])).await.unwrap();

    assert_eq!(contexts[0]["config"][0]["value"], "eu-west-1");
    assert_eq!(
        last_request_body(&server).await["query"],
        "query Contexts { contexts { id config { id value } } }"
    );
}

#[tokio::test]
async fn test_get_context_by_id_not_found() {
    let server = MockServer::start().await;
    let client = create_authenticated_client(&server).await;
    respond_to(&server, "query Context(", json!({"context": null})).await;

    assert!(client.get_context_by_id("nope", None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_context_sends_config_attachments() {
    let server = MockServer::start().await;
    let client = create_authenticated_client(&server).await;
    Mock::given(method("POST"))
        .and(body_string_contains("contextCreateV2"))
        .and(body_partial_json(json!({
            "variables": {"input": {
                "name": "aws-prod",
                "space": "root",
                "configAttachments": [
                    {"id": "AWS_REGION", "type": "ENVIRONMENT_VARIABLE", "value": "eu-west-1", "writeOnly": false},
                    {"id": "AWS_SECRET_ACCESS_KEY", "type": "ENVIRONMENT_VARIABLE", "value": "s3cr3t", "writeOnly": true}
                ]
            }}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"contextCreateV2": {"id": "aws-prod", "name": "aws-prod"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let input = ContextInput::new("aws-prod", "root")
        .variable(ConfigVariable::new("AWS_REGION", "eu-west-1"))
        .variable(ConfigVariable::new("AWS_SECRET_ACCESS_KEY", "s3cr3t").write_only());
    let context = client.create_context(&input).await.unwrap();

    assert_eq!(context["name"], "aws-prod");
}

#[tokio::test]
async fn test_create_context_null_result_is_unexpected() {
    let server = MockServer::start().await;
    let client = create_authenticated_client(&server).await;
    respond_to(&server, "contextCreateV2", json!({"contextCreateV2": null})).await;

    let result = client
        .create_context(&ContextInput::new("ctx", "root"))
        .await;

    assert!(matches!(
        result,
        Err(SpaceliftError::UnexpectedResponse { .. })
    ));
}

#[tokio::test]
async fn test_delete_context_of_unknown_id() {
    let server = MockServer::start().await;
    let client = create_authenticated_client(&server).await;
    respond_to(&server, "contextDelete", json!({"contextDelete": null})).await;

    assert_eq!(client.delete_context("nope").await.unwrap(), None);
}
