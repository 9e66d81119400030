//! Failures surface as tool errors, never as protocol faults.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use super::harness::McpTestHarness;

#[tokio::test]
async fn test_upstream_not_found() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/999/assignments"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"errors":[{"message":"The specified resource does not exist."}]}"#),
        )
        .expect(1)
        .mount(&harness.canvas)
        .await;

    let result = harness
        .call_tool("get_course_assignments", json!({"course_id": 999}))
        .await?;
    assert!(result.is_error);

    let parsed = result.json()?;
    assert_eq!(parsed["error"], "upstream_error");
    assert_eq!(parsed["status"], 404);
    assert!(parsed["body"]
        .as_str()
        .unwrap()
        .contains("does not exist"));

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_token() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid access token."))
        .expect(1)
        .mount(&harness.canvas)
        .await;

    let result = harness.call_tool("get_courses", json!({})).await?;
    assert!(result.is_error);
    assert!(result.text.contains("401"), "{}", result.text);
    assert!(result.text.contains("Invalid access token."), "{}", result.text);

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_invalid_arguments_list_every_field_without_upstream_call() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    let result = harness
        .call_tool("get_assignment_details", json!({"assignment_id": "abc"}))
        .await?;
    assert!(result.is_error);

    let parsed = result.json()?;
    assert_eq!(parsed["error"], "invalid_arguments");
    let fields: Vec<&str> = parsed["violations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v["field"].as_str())
        .collect();
    assert!(fields.contains(&"course_id"), "{:?}", fields);
    assert!(fields.contains(&"assignment_id"), "{:?}", fields);
    assert_eq!(harness.upstream_request_count().await, 0);

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_unknown_tool() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    let result = harness.call_tool("post_announcement", json!({})).await?;
    assert!(result.is_error);
    assert_eq!(result.json()?["error"], "unknown_tool");
    assert_eq!(harness.upstream_request_count().await, 0);

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_malformed_upstream_body() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/1/files"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&harness.canvas)
        .await;

    let result = harness
        .call_tool("get_course_files", json!({"course_id": 1}))
        .await?;
    assert!(result.is_error);
    assert_eq!(result.json()?["error"], "internal_error");

    harness.teardown().await?;
    Ok(())
}
