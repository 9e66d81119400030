//! Parameter structs for all MCP tools.
//!
//! Each struct derives `Deserialize + JsonSchema`; the schema is what
//! `tools/list` advertises and what arguments are validated against. The
//! [`EndpointParams`] impl maps validated arguments onto the Canvas path.

use canvas_client::ApiRequest;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Tool parameters that resolve to a single Canvas GET.
pub trait EndpointParams: DeserializeOwned + JsonSchema + Send + 'static {
    fn request(&self) -> ApiRequest;
}

fn course(course_id: u64) -> ApiRequest {
    ApiRequest::new(["courses"]).segment(course_id)
}

// ── get_courses ──

/// Parameters for the `get_courses` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCoursesParams {}

impl EndpointParams for GetCoursesParams {
    fn request(&self) -> ApiRequest {
        ApiRequest::new(["courses"])
    }
}

// ── get_course_content ──

/// Parameters for the `get_course_content` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCourseContentParams {
    #[schemars(description = "Canvas course ID")]
    pub course_id: u64,
}

impl EndpointParams for GetCourseContentParams {
    fn request(&self) -> ApiRequest {
        course(self.course_id)
            .segment("modules")
            .query("include[]", "items")
    }
}

// ── get_course_assignments ──

/// Parameters for the `get_course_assignments` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCourseAssignmentsParams {
    #[schemars(description = "Canvas course ID")]
    pub course_id: u64,
}

impl EndpointParams for GetCourseAssignmentsParams {
    fn request(&self) -> ApiRequest {
        course(self.course_id).segment("assignments")
    }
}

// ── get_assignment_details ──

/// Parameters for the `get_assignment_details` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAssignmentDetailsParams {
    #[schemars(description = "Canvas course ID")]
    pub course_id: u64,
    #[schemars(description = "Assignment ID within the course")]
    pub assignment_id: u64,
}

impl EndpointParams for GetAssignmentDetailsParams {
    fn request(&self) -> ApiRequest {
        course(self.course_id)
            .segment("assignments")
            .segment(self.assignment_id)
    }
}

// ── get_course_pages ──

/// Parameters for the `get_course_pages` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCoursePagesParams {
    #[schemars(description = "Canvas course ID")]
    pub course_id: u64,
}

impl EndpointParams for GetCoursePagesParams {
    fn request(&self) -> ApiRequest {
        course(self.course_id).segment("pages")
    }
}

// ── get_page_content ──

/// Parameters for the `get_page_content` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetPageContentParams {
    #[schemars(description = "Canvas course ID")]
    pub course_id: u64,
    /// Page slug as returned in the `url` field of `get_course_pages`.
    #[schemars(description = "Page URL slug (the 'url' field from get_course_pages)")]
    pub page_url: String,
}

impl EndpointParams for GetPageContentParams {
    fn request(&self) -> ApiRequest {
        course(self.course_id)
            .segment("pages")
            .segment(&self.page_url)
    }
}

// ── get_course_files ──

/// Parameters for the `get_course_files` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCourseFilesParams {
    #[schemars(description = "Canvas course ID")]
    pub course_id: u64,
}

impl EndpointParams for GetCourseFilesParams {
    fn request(&self) -> ApiRequest {
        course(self.course_id).segment("files")
    }
}

// ── get_folder_files ──

/// Parameters for the `get_folder_files` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetFolderFilesParams {
    #[schemars(description = "Canvas folder ID")]
    pub folder_id: u64,
}

impl EndpointParams for GetFolderFilesParams {
    fn request(&self) -> ApiRequest {
        ApiRequest::new(["folders"])
            .segment(self.folder_id)
            .segment("files")
    }
}

// ── get_course_discussion_topics ──

/// Parameters for the `get_course_discussion_topics` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCourseDiscussionTopicsParams {
    #[schemars(description = "Canvas course ID")]
    pub course_id: u64,
}

impl EndpointParams for GetCourseDiscussionTopicsParams {
    fn request(&self) -> ApiRequest {
        course(self.course_id).segment("discussion_topics")
    }
}

// ── get_topic_entries ──

/// Parameters for the `get_topic_entries` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTopicEntriesParams {
    #[schemars(description = "Canvas course ID")]
    pub course_id: u64,
    #[schemars(description = "Discussion topic ID")]
    pub topic_id: u64,
}

impl EndpointParams for GetTopicEntriesParams {
    fn request(&self) -> ApiRequest {
        course(self.course_id)
            .segment("discussion_topics")
            .segment(self.topic_id)
            .segment("view")
    }
}

// ── get_course_students ──

/// Parameters for the `get_course_students` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCourseStudentsParams {
    #[schemars(description = "Canvas course ID")]
    pub course_id: u64,
}

impl EndpointParams for GetCourseStudentsParams {
    fn request(&self) -> ApiRequest {
        course(self.course_id)
            .segment("users")
            .query("enrollment_type", "student")
    }
}

// ── get_assignment_submissions ──

/// Parameters for the `get_assignment_submissions` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAssignmentSubmissionsParams {
    #[schemars(description = "Canvas course ID")]
    pub course_id: u64,
    #[schemars(description = "Assignment ID within the course")]
    pub assignment_id: u64,
    /// Restrict results to one student's submission. `0` means no filter.
    #[schemars(description = "Optional student user ID to filter submissions")]
    pub user_id: Option<u64>,
}

impl EndpointParams for GetAssignmentSubmissionsParams {
    fn request(&self) -> ApiRequest {
        let request = course(self.course_id)
            .segment("assignments")
            .segment(self.assignment_id)
            .segment("submissions");
        match self.user_id {
            Some(user_id) if user_id != 0 => request.query("student_ids[]", user_id),
            _ => request,
        }
    }
}

// ── get_course_quizzes ──

/// Parameters for the `get_course_quizzes` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCourseQuizzesParams {
    #[schemars(description = "Canvas course ID")]
    pub course_id: u64,
}

impl EndpointParams for GetCourseQuizzesParams {
    fn request(&self) -> ApiRequest {
        course(self.course_id).segment("quizzes")
    }
}

// ── get_quiz_submissions ──

/// Parameters for the `get_quiz_submissions` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetQuizSubmissionsParams {
    #[schemars(description = "Canvas course ID")]
    pub course_id: u64,
    #[schemars(description = "Quiz ID within the course")]
    pub quiz_id: u64,
}

impl EndpointParams for GetQuizSubmissionsParams {
    fn request(&self) -> ApiRequest {
        course(self.course_id)
            .segment("quizzes")
            .segment(self.quiz_id)
            .segment("submissions")
    }
}
