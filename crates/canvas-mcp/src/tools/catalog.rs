//! Static tool catalog.
//!
//! Every tool is a [`ToolSpec`] row: name, description, a schema function and
//! a handler. All tools but `get_courses` share [`passthrough`], which performs
//! the tool's single GET and pretty-prints the body.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use canvas_client::CanvasApi;
use canvas_sdk::courses::{classify_courses, Course};
use chrono::Utc;
use schemars::JsonSchema;
use serde_json::{Map, Value};

use super::error::{FieldViolation, ToolError, ToolResult};
use super::params::*;

pub type ToolFuture<'a> = Pin<Box<dyn Future<Output = ToolResult<String>> + Send + 'a>>;

/// Handler invoked with arguments that already passed schema validation.
pub type ToolHandler = for<'a> fn(&'a dyn CanvasApi, &'static str, Map<String, Value>) -> ToolFuture<'a>;

/// One row of the catalog.
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: fn() -> Map<String, Value>,
    pub handler: ToolHandler,
}

impl fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

pub static CATALOG: &[ToolSpec] = &[
    ToolSpec {
        name: "get_courses",
        description: "List all courses for the current user, grouped into past, current and future by academic term. A '(Term YYYY)' marker in the course name decides the term; otherwise start_at is compared with now; courses with neither are treated as current.",
        input_schema: input_schema::<GetCoursesParams>,
        handler: list_courses,
    },
    ToolSpec {
        name: "get_course_content",
        description: "Get the modules of a course with their items included. Use course IDs from get_courses.",
        input_schema: input_schema::<GetCourseContentParams>,
        handler: passthrough::<GetCourseContentParams>,
    },
    ToolSpec {
        name: "get_course_assignments",
        description: "List all assignments in a course.",
        input_schema: input_schema::<GetCourseAssignmentsParams>,
        handler: passthrough::<GetCourseAssignmentsParams>,
    },
    ToolSpec {
        name: "get_assignment_details",
        description: "Get full details of one assignment, including description, due dates and points possible.",
        input_schema: input_schema::<GetAssignmentDetailsParams>,
        handler: passthrough::<GetAssignmentDetailsParams>,
    },
    ToolSpec {
        name: "get_course_pages",
        description: "List the wiki pages of a course. Each page's 'url' field is the slug for get_page_content.",
        input_schema: input_schema::<GetCoursePagesParams>,
        handler: passthrough::<GetCoursePagesParams>,
    },
    ToolSpec {
        name: "get_page_content",
        description: "Get the body of a course page by its URL slug.",
        input_schema: input_schema::<GetPageContentParams>,
        handler: passthrough::<GetPageContentParams>,
    },
    ToolSpec {
        name: "get_course_files",
        description: "List the files uploaded to a course.",
        input_schema: input_schema::<GetCourseFilesParams>,
        handler: passthrough::<GetCourseFilesParams>,
    },
    ToolSpec {
        name: "get_folder_files",
        description: "List the files in a folder.",
        input_schema: input_schema::<GetFolderFilesParams>,
        handler: passthrough::<GetFolderFilesParams>,
    },
    ToolSpec {
        name: "get_course_discussion_topics",
        description: "List the discussion topics of a course.",
        input_schema: input_schema::<GetCourseDiscussionTopicsParams>,
        handler: passthrough::<GetCourseDiscussionTopicsParams>,
    },
    ToolSpec {
        name: "get_topic_entries",
        description: "Get the full threaded view of a discussion topic, including all entries and replies.",
        input_schema: input_schema::<GetTopicEntriesParams>,
        handler: passthrough::<GetTopicEntriesParams>,
    },
    ToolSpec {
        name: "get_course_students",
        description: "List the students enrolled in a course.",
        input_schema: input_schema::<GetCourseStudentsParams>,
        handler: passthrough::<GetCourseStudentsParams>,
    },
    ToolSpec {
        name: "get_assignment_submissions",
        description: "List submissions for an assignment, optionally restricted to one student via user_id.",
        input_schema: input_schema::<GetAssignmentSubmissionsParams>,
        handler: passthrough::<GetAssignmentSubmissionsParams>,
    },
    ToolSpec {
        name: "get_course_quizzes",
        description: "List the quizzes in a course.",
        input_schema: input_schema::<GetCourseQuizzesParams>,
        handler: passthrough::<GetCourseQuizzesParams>,
    },
    ToolSpec {
        name: "get_quiz_submissions",
        description: "List submissions for a quiz.",
        input_schema: input_schema::<GetQuizSubmissionsParams>,
        handler: passthrough::<GetQuizSubmissionsParams>,
    },
];

/// Look up a catalog entry by tool name.
pub fn find(name: &str) -> Option<&'static ToolSpec> {
    CATALOG.iter().find(|spec| spec.name == name)
}

/// JSON Schema for a params struct, as a JSON object.
pub fn input_schema<P: JsonSchema>() -> Map<String, Value> {
    match serde_json::to_value(schemars::schema_for!(P)) {
        Ok(Value::Object(schema)) => schema,
        _ => {
            let mut schema = Map::new();
            schema.insert("type".to_string(), Value::from("object"));
            schema
        }
    }
}

fn parse_params<P: EndpointParams>(tool: &str, args: Map<String, Value>) -> ToolResult<P> {
    serde_json::from_value(Value::Object(args)).map_err(|e| ToolError::InvalidArguments {
        tool: tool.to_string(),
        violations: vec![FieldViolation::new("arguments", e.to_string())],
    })
}

fn passthrough<'a, P: EndpointParams>(
    api: &'a dyn CanvasApi,
    tool: &'static str,
    args: Map<String, Value>,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let params: P = parse_params(tool, args)?;
        let body = api.get(&params.request()).await?;
        Ok(serde_json::to_string_pretty(&body)?)
    })
}

fn list_courses<'a>(
    api: &'a dyn CanvasApi,
    tool: &'static str,
    args: Map<String, Value>,
) -> ToolFuture<'a> {
    Box::pin(async move {
        let params: GetCoursesParams = parse_params(tool, args)?;
        let body = api.get(&params.request()).await?;
        let courses: Vec<Course> = serde_json::from_value(body).map_err(|e| {
            ToolError::UnexpectedResponse(format!("course list did not match the expected shape: {}", e))
        })?;
        let classification = classify_courses(courses, Utc::now());
        Ok(serde_json::to_string_pretty(&classification)?)
    })
}
