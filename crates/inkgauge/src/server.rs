//! MCP server: the analyzer as tools an editor or assistant can call on
//! every draft change.
//!
//! Tools validate their input and delegate to `inkgauge_core`, exactly like
//! the CLI commands; nothing here scores text itself.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars::{self, JsonSchema};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::{Deserialize, Serialize};

use inkgauge_core::input::{DEFAULT_MAX_INPUT_BYTES, validate_input_size};
use inkgauge_core::readability::check_readability;

use crate::commands::analyze::NO_CONTENT_MESSAGE;

/// How `get_info` formats its answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InfoFormat {
    /// One line per field.
    #[default]
    Text,
    /// A JSON object.
    Json,
}

/// Arguments to `get_info`.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetInfoParams {
    /// `text` (default) or `json`.
    #[serde(default)]
    pub format: InfoFormat,
}

/// Arguments to `analyze_writing`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AnalyzeWritingParams {
    /// The draft, HTML or plain text. Tags are stripped before scoring.
    pub text: String,
    /// Flag the report `over_max` above this score (1-10). Falls back to the
    /// server's configured gate.
    pub max_score: Option<f64>,
}

#[derive(Serialize)]
struct PackageSummary {
    name: &'static str,
    version: &'static str,
    description: &'static str,
}

const PACKAGE: PackageSummary = PackageSummary {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    description: env!("CARGO_PKG_DESCRIPTION"),
};

fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

fn to_json(value: &impl Serialize) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("cannot encode result: {e}"), None))
}

/// The inkgauge MCP server.
#[derive(Clone)]
pub struct InkServer {
    tool_router: ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    default_max_score: Option<f64>,
}

impl Default for InkServer {
    fn default() -> Self {
        Self::new()
    }
}

impl InkServer {
    /// Reject `text` longer than this many bytes; `None` accepts anything.
    pub fn with_input_limit(mut self, max_input_bytes: Option<usize>) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    /// Gate applied when a call omits `max_score`.
    pub fn with_max_score(mut self, max_score: Option<f64>) -> Self {
        self.default_max_score = max_score;
        self
    }
}

#[tool_router]
impl InkServer {
    /// A server with the 5 MiB input limit and no default gate.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
            default_max_score: None,
        }
    }

    #[tool(description = "Name, version and description of this inkgauge server")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = match params.format {
            InfoFormat::Json => to_json(&PACKAGE)?,
            InfoFormat::Text => format!(
                "{} {}\n{}",
                PACKAGE.name, PACKAGE.version, PACKAGE.description
            ),
        };
        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(text_result(text))
    }

    #[tool(
        description = "Score a draft (HTML or plain text) from 1 to 10, lower is simpler. Returns the score, its band, every complex word in order and suggestions as JSON."
    )]
    #[tracing::instrument(skip_all, fields(otel.kind = "server", text_len = params.0.text.len()))]
    fn analyze_writing(
        &self,
        params: Parameters<AnalyzeWritingParams>,
    ) -> Result<CallToolResult, McpError> {
        let Parameters(AnalyzeWritingParams { text, max_score }) = params;
        validate_input_size(text.len(), self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        if text.is_empty() {
            tracing::info!(tool = "analyze_writing", "empty draft");
            return Ok(text_result(NO_CONTENT_MESSAGE));
        }

        let report = check_readability(&text, max_score.or(self.default_max_score));
        tracing::info!(
            tool = "analyze_writing",
            score = report.readability_score,
            complex_words = report.complex_words.len(),
            over_max = report.over_max,
            "MCP tool completed"
        );
        Ok(text_result(to_json(&report)?))
    }
}

#[tool_handler]
impl ServerHandler for InkServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: PACKAGE.name.to_string(),
                version: PACKAGE.version.to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Send the current draft to analyze_writing to get a 1-10 readability score, \
                 the complex words it contains and suggestions for simplifying it."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn only_text(result: &CallToolResult) -> &str {
        assert!(!result.is_error.unwrap_or(false));
        match result.content.as_slice() {
            [item] => match &item.raw {
                RawContent::Text(t) => &t.text,
                _ => panic!("expected text content"),
            },
            items => panic!("expected one content item, got {}", items.len()),
        }
    }

    fn report(server: &InkServer, text: &str, max_score: Option<f64>) -> serde_json::Value {
        let result = server
            .analyze_writing(Parameters(AnalyzeWritingParams {
                text: text.to_string(),
                max_score,
            }))
            .unwrap();
        serde_json::from_str(only_text(&result)).unwrap()
    }

    #[test]
    fn handshake_advertises_tools() {
        let info = ServerHandler::get_info(&InkServer::new());
        assert_eq!(info.server_info.name, "inkgauge");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("analyze_writing"));
    }

    #[test]
    fn get_info_in_both_formats() {
        let server = InkServer::new();

        let text = server.get_info(Parameters(GetInfoParams::default())).unwrap();
        assert!(only_text(&text).starts_with(&format!("inkgauge {}", PACKAGE.version)));

        let json = server
            .get_info(Parameters(GetInfoParams {
                format: InfoFormat::Json,
            }))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(only_text(&json)).unwrap();
        assert_eq!(json["version"], PACKAGE.version);
    }

    #[test]
    fn format_param_is_optional_and_lowercase() {
        let params: GetInfoParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.format, InfoFormat::Text);
        let params: GetInfoParams = serde_json::from_str(r#"{"format":"json"}"#).unwrap();
        assert_eq!(params.format, InfoFormat::Json);
    }

    #[test]
    fn simple_markup_scores_low() {
        let json = report(&InkServer::new(), "<p>The cat sat on the mat.</p>", None);
        assert!(json["readability_score"].as_f64().unwrap() < 2.0);
        assert_eq!(json["terms"], 6);
        assert_eq!(json["suggestions"], serde_json::json!([]));
        assert_eq!(json["over_max"], false);
    }

    #[test]
    fn complex_words_are_listed() {
        let json = report(&InkServer::new(), "A beautiful and necessary plan.", None);
        assert_eq!(
            json["complex_words"],
            serde_json::json!(["beautiful", "necessary"])
        );
        assert_eq!(json["suggestions"][0]["kind"], "complexity");
    }

    #[test]
    fn call_gate_beats_server_gate() {
        let server = InkServer::new().with_max_score(Some(2.0));

        let json = report(&server, "Beautiful.", None);
        assert_eq!(json["over_max"], true);
        assert_eq!(json["max_score"], 2.0);

        let json = report(&server, "Beautiful.", Some(9.0));
        assert_eq!(json["over_max"], false);
    }

    #[test]
    fn empty_draft_gets_message() {
        let result = InkServer::new()
            .analyze_writing(Parameters(AnalyzeWritingParams {
                text: String::new(),
                max_score: None,
            }))
            .unwrap();
        assert_eq!(only_text(&result), NO_CONTENT_MESSAGE);
    }

    #[test]
    fn input_limit_applies() {
        let err = InkServer::new()
            .with_input_limit(Some(8))
            .analyze_writing(Parameters(AnalyzeWritingParams {
                text: "far more than eight bytes".to_string(),
                max_score: None,
            }))
            .unwrap_err();
        assert!(err.message.contains("input too large"));

        let unlimited = InkServer::new().with_input_limit(None);
        let json = report(&unlimited, &"word ".repeat(10_000), None);
        assert_eq!(json["readability_score"], 10.0);
    }
}
