//! Student workflows: find courses, then drill into one.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use super::harness::{McpTestHarness, TEST_TOKEN};

#[tokio::test]
async fn test_get_courses_groups_by_term() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Intro Biology (Fall 2001)", "course_code": "BIO101"},
            {"id": 2, "name": "Ancient Latin", "start_at": "2002-01-15T00:00:00Z"},
            {"id": 3, "name": "Orientation"},
            {"id": 4, "name": "Starship Design (Spring 2999)"},
            {"id": 5, "name": "Far Seminar", "start_at": "2998-09-01T00:00:00Z"}
        ])))
        .expect(1)
        .mount(&harness.canvas)
        .await;

    let result = harness.call_tool("get_courses", json!({})).await?;
    assert!(!result.is_error, "get_courses failed: {}", result.text);

    let parsed = result.json()?;
    let ids = |bucket: &str| -> Vec<i64> {
        parsed[bucket]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|c| c["id"].as_i64())
            .collect()
    };
    assert_eq!(ids("past"), vec![1, 2]);
    assert_eq!(ids("current"), vec![3]);
    assert_eq!(ids("future"), vec![4, 5]);
    assert_eq!(parsed["past"][0]["course_code"], "BIO101");
    assert!(parsed["classified_at"].is_string());

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_course_content_includes_module_items() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    let modules = json!([
        {"id": 10, "name": "Week 1", "items": [{"id": 100, "title": "Syllabus", "type": "Page"}]}
    ]);
    Mock::given(method("GET"))
        .and(path("/api/v1/courses/42/modules"))
        .and(query_param("include[]", "items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(modules.clone()))
        .expect(1)
        .mount(&harness.canvas)
        .await;

    let result = harness
        .call_tool("get_course_content", json!({"course_id": 42}))
        .await?;
    assert!(!result.is_error, "{}", result.text);
    assert_eq!(result.json()?, modules);
    assert!(result.text.contains('\n'), "output is pretty-printed");

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_page_content_slug_is_one_path_segment() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/7/pages/week%201%2Fnotes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "week-1-notes",
            "body": "<p>Hello</p>"
        })))
        .expect(1)
        .mount(&harness.canvas)
        .await;

    let result = harness
        .call_tool(
            "get_page_content",
            json!({"course_id": 7, "page_url": "week 1/notes"}),
        )
        .await?;
    assert!(!result.is_error, "{}", result.text);
    assert_eq!(result.json()?["body"], "<p>Hello</p>");

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_submissions_filtered_by_student() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/3/assignments/8/submissions"))
        .and(query_param("student_ids[]", "55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 900, "user_id": 55, "score": 9.5}
        ])))
        .expect(1)
        .mount(&harness.canvas)
        .await;

    let result = harness
        .call_tool(
            "get_assignment_submissions",
            json!({"course_id": 3, "assignment_id": 8, "user_id": 55}),
        )
        .await?;
    assert!(!result.is_error, "{}", result.text);
    assert_eq!(result.json()?[0]["user_id"], 55);

    harness.teardown().await?;
    Ok(())
}

#[tokio::test]
async fn test_discussion_and_quiz_drilldown() -> anyhow::Result<()> {
    let harness = McpTestHarness::setup().await?;

    Mock::given(method("GET"))
        .and(path("/api/v1/courses/3/discussion_topics/12/view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "participants": [],
            "view": [{"id": 1, "message": "First!"}]
        })))
        .expect(1)
        .mount(&harness.canvas)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/courses/3/quizzes/4/submissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "quiz_submissions": [{"id": 77, "score": 10}]
        })))
        .expect(1)
        .mount(&harness.canvas)
        .await;

    let topic = harness
        .call_tool("get_topic_entries", json!({"course_id": 3, "topic_id": 12}))
        .await?;
    assert!(!topic.is_error, "{}", topic.text);
    assert_eq!(topic.json()?["view"][0]["message"], "First!");

    let quiz = harness
        .call_tool("get_quiz_submissions", json!({"course_id": 3, "quiz_id": 4}))
        .await?;
    assert!(!quiz.is_error, "{}", quiz.text);
    assert_eq!(quiz.json()?["quiz_submissions"][0]["id"], 77);

    harness.teardown().await?;
    Ok(())
}
