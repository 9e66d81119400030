//! MCP ServerHandler implementation for Canvas.
//!
//! Exposes the static tool catalog as read-only MCP tools:
//!
//! - `get_courses`: Courses grouped into past/current/future terms
//! - `get_course_content`: Course modules with items
//! - `get_course_assignments` / `get_assignment_details`
//! - `get_course_pages` / `get_page_content`
//! - `get_course_files` / `get_folder_files`
//! - `get_course_discussion_topics` / `get_topic_entries`
//! - `get_course_students`
//! - `get_assignment_submissions`
//! - `get_course_quizzes` / `get_quiz_submissions`
//!
//! `tools/call` never fails at the protocol level: unknown tools, invalid
//! arguments and Canvas errors all come back as text with `isError` set.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};

use canvas_client::{CanvasApi, CanvasClient, CanvasConfig, ClientResult};

use crate::tools::{DispatchOutcome, Dispatcher};

const INSTRUCTIONS: &str = "Read-only access to a Canvas LMS account. \
    Start with get_courses to find course IDs; it groups courses into past, current and future terms.\n\
    Course drill-down: get_course_content (modules and items), get_course_assignments → get_assignment_details, \
    get_course_pages → get_page_content (pass the page 'url' slug), get_course_files, \
    get_course_discussion_topics → get_topic_entries, get_course_quizzes → get_quiz_submissions, \
    get_course_students, get_assignment_submissions (optional user_id filter).\n\
    Folder contents: get_folder_files.\n\
    Results are raw Canvas JSON. Errors are JSON objects with an 'error' code and 'message'.";

/// Canvas MCP server handler.
#[derive(Debug, Clone)]
pub struct CanvasMcpServer {
    dispatcher: Dispatcher,
}

impl CanvasMcpServer {
    /// Create a server backed by any Canvas API implementation.
    pub fn new(api: Arc<dyn CanvasApi>) -> Self {
        Self {
            dispatcher: Dispatcher::new(api),
        }
    }

    /// Create a server with an HTTP client for the configured Canvas instance.
    pub fn from_config(config: &CanvasConfig) -> ClientResult<Self> {
        let client = CanvasClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Tool metadata advertised by `tools/list`.
    pub fn tool_definitions(&self) -> Vec<Tool> {
        self.dispatcher
            .tools()
            .iter()
            .map(|spec| Tool::new(spec.name, spec.description, Arc::new((spec.input_schema)())))
            .collect()
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl ServerHandler for CanvasMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "canvas-mcp".to_string(),
                title: Some("Canvas MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing read-only Canvas LMS data: courses, modules, \
                     assignments, pages, files, discussions, quizzes and submissions"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.tool_definitions(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = request.arguments.unwrap_or_default();
        let DispatchOutcome { text, is_error } =
            self.dispatcher.dispatch(&request.name, arguments).await;

        let content = vec![Content::text(text)];
        Ok(if is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        })
    }
}
