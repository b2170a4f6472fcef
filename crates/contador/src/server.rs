//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the analyzer over stdio so editor assistants can request counts,
//! keyword occurrences, and content-word rankings for a piece of text. Tools
//! are thin wrappers: each delegates to `contador_core` and serializes the
//! result as JSON text.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use contador_core::config::Config;
use contador_core::{
    DEFAULT_TOP_WORDS, ExclusionConfig, KeywordCount, KeywordMatching, MetricsSnapshot, Session,
    WordClass, add_keyword, count_keywords_with, excluded_words,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Word classes to leave out of the ranking. Omitted fields default to excluded.
    pub exclusions: Option<ExclusionConfig>,
    /// Keywords to count. Replaces the server's configured keywords.
    pub keywords: Option<Vec<String>>,
    /// Keyword matching: "literal" or "pattern".
    pub keyword_matching: Option<KeywordMatching>,
    /// Number of content words to rank.
    pub top: Option<usize>,
}

/// Parameters for the `count_keywords` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CountKeywordsParams {
    /// The text to scan.
    pub text: String,
    /// Keywords to count, in order. Blanks and duplicates are dropped.
    pub keywords: Vec<String>,
    /// Keyword matching: "literal" or "pattern".
    pub keyword_matching: Option<KeywordMatching>,
}

/// Parameters for the `list_excluded_words` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ListExcludedWordsParams {
    /// Return one class only, regardless of exclusions.
    pub class: Option<WordClass>,
    /// Exclusion settings to list. Defaults to the server's configuration.
    pub exclusions: Option<ExclusionConfig>,
}

#[derive(Serialize)]
struct AnalysisOutput<'a> {
    #[serde(flatten)]
    metrics: &'a MetricsSnapshot,
    excluded_classes: Vec<WordClass>,
    keywords: &'a [KeywordCount],
}

/// Settings applied when a tool call leaves them out.
#[derive(Debug, Clone)]
struct Defaults {
    exclusions: ExclusionConfig,
    keywords: Vec<String>,
    matching: KeywordMatching,
    top_words: usize,
    max_input: Option<usize>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            exclusions: ExclusionConfig::default(),
            keywords: Vec::new(),
            matching: KeywordMatching::default(),
            top_words: DEFAULT_TOP_WORDS,
            max_input: Some(contador_core::DEFAULT_MAX_INPUT_BYTES),
        }
    }
}

/// MCP server wrapping the text analyzer.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ContadorServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    defaults: Defaults,
}

impl Default for ContadorServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ContadorServer {
    /// Create a server with built-in defaults.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            defaults: Defaults::default(),
        }
    }

    /// Create a server whose defaults come from loaded configuration.
    pub fn from_config(config: &Config, max_input: Option<usize>) -> Self {
        let keywords = config
            .keywords
            .iter()
            .fold(Vec::new(), |list, raw| add_keyword(&list, raw));
        Self {
            tool_router: Self::tool_router(),
            defaults: Defaults {
                exclusions: config.exclusions,
                keywords,
                matching: config.keyword_matching,
                top_words: config.top_words.unwrap_or(DEFAULT_TOP_WORDS),
                max_input,
            },
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.defaults.max_input {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Full analysis of a text.
    #[tool(
        description = "Analyze Spanish text: character, word, sentence, and paragraph counts, average and longest word, keyword counts, and the most frequent content words."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let exclusions = params.exclusions.unwrap_or(self.defaults.exclusions);
        let matching = params.keyword_matching.unwrap_or(self.defaults.matching);
        let top = params.top.unwrap_or(self.defaults.top_words);
        let keywords = params
            .keywords
            .unwrap_or_else(|| self.defaults.keywords.clone());
        tracing::debug!(tool = "analyze_text", top, %matching, "executing MCP tool");

        let mut session = Session::new(exclusions, matching).with_top_words(top);
        for keyword in &keywords {
            session.add_keyword(keyword);
        }
        session.set_text(params.text);

        let json = to_json(&AnalysisOutput {
            metrics: session.metrics(),
            excluded_classes: exclusions.active_classes(),
            keywords: session.keyword_counts(),
        })?;

        tracing::info!(
            tool = "analyze_text",
            words = session.metrics().word_count,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Count keyword occurrences.
    #[tool(
        description = "Count whole-word, case-insensitive occurrences of each keyword in a text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn count_keywords(
        &self,
        Parameters(params): Parameters<CountKeywordsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let keywords = params
            .keywords
            .iter()
            .fold(Vec::new(), |list, raw| add_keyword(&list, raw));
        if keywords.is_empty() {
            return Err(McpError::invalid_params("no non-blank keywords given", None));
        }
        let matching = params.keyword_matching.unwrap_or(self.defaults.matching);
        tracing::debug!(tool = "count_keywords", count = keywords.len(), %matching, "executing MCP tool");

        let counts = count_keywords_with(&keywords, &params.text, matching);
        let json = to_json(&counts)?;

        tracing::info!(tool = "count_keywords", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// List closed-class words.
    #[tool(
        description = "List the Spanish closed-class words (determiners, prepositions, pronouns, adverbs, conjunctions) excluded from the content-word ranking."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn list_excluded_words(
        &self,
        Parameters(params): Parameters<ListExcludedWordsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "list_excluded_words", class = ?params.class, "executing MCP tool");

        let json = match params.class {
            Some(class) => to_json(&class.words())?,
            None => {
                let exclusions = params.exclusions.unwrap_or(self.defaults.exclusions);
                let mut words: Vec<&str> = excluded_words(&exclusions).into_iter().collect();
                words.sort_unstable();
                to_json(&words)?
            }
        };

        tracing::info!(tool = "list_excluded_words", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ContadorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text for full Spanish text metrics, \
                 count_keywords for keyword occurrences, and list_excluded_words \
                 to see which words the ranking ignores.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    const SAMPLE: &str = "El perro corre. El gato duerme.\nOtro párrafo aquí.";

    #[test]
    fn server_info_has_correct_name() {
        let server = ContadorServer::new();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = ContadorServer::new();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains("analyze_text"));
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn extract_json(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("output should be valid JSON")
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ContadorServer::new();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let json = extract_json(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ContadorServer::new();
        let params = Parameters(GetInfoParams {
            format: default_format(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn analyze_text_tool_reports_metrics() {
        let server = ContadorServer::new();
        let params = Parameters(AnalyzeTextParams {
            text: SAMPLE.to_string(),
            keywords: Some(vec!["el".into(), "perro".into()]),
            ..Default::default()
        });

        let result = server.analyze_text(params).expect("analyze_text should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let json = extract_json(&result);
        assert_eq!(json["word_count"], 9);
        assert_eq!(json["sentence_count"], 3);
        assert_eq!(json["paragraph_count"], 2);
        assert_eq!(json["top_words"][0]["word"], "perro");
        assert_eq!(json["keywords"][0]["word"], "el");
        assert_eq!(json["keywords"][0]["count"], 2);
        assert_eq!(json["excluded_classes"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn analyze_text_tool_honors_exclusions() {
        let server = ContadorServer::new();
        let params = Parameters(AnalyzeTextParams {
            text: SAMPLE.to_string(),
            exclusions: Some(ExclusionConfig::none()),
            top: Some(1),
            ..Default::default()
        });

        let result = server.analyze_text(params).expect("analyze_text should succeed");
        let json = extract_json(&result);
        assert_eq!(json["top_words"][0]["word"], "el");
        assert_eq!(json["top_words"][0]["count"], 2);
        assert_eq!(json["top_words"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn analyze_text_tool_rejects_oversized_input() {
        let config = Config::default();
        let server = ContadorServer::from_config(&config, Some(4));
        let params = Parameters(AnalyzeTextParams {
            text: "hola mundo".to_string(),
            ..Default::default()
        });
        assert!(server.analyze_text(params).is_err());
    }

    #[test]
    fn configured_keywords_apply_when_omitted() {
        let config = Config {
            keywords: vec!["gato".into(), "gato".into()],
            ..Default::default()
        };
        let server = ContadorServer::from_config(&config, None);
        let params = Parameters(AnalyzeTextParams {
            text: SAMPLE.to_string(),
            ..Default::default()
        });

        let result = server.analyze_text(params).expect("analyze_text should succeed");
        let json = extract_json(&result);
        let keywords = json["keywords"].as_array().unwrap();
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0]["count"], 1);
    }

    #[test]
    fn count_keywords_tool_works() {
        let server = ContadorServer::new();
        let params = Parameters(CountKeywordsParams {
            text: "El perro el gato EL".to_string(),
            keywords: vec!["el".into(), " ".into(), "gato".into()],
            keyword_matching: None,
        });

        let result = server
            .count_keywords(params)
            .expect("count_keywords should succeed");
        let json = extract_json(&result);
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[0]["count"], 3);
        assert_eq!(json[1]["count"], 1);
    }

    #[test]
    fn count_keywords_tool_rejects_blank_list() {
        let server = ContadorServer::new();
        let params = Parameters(CountKeywordsParams {
            text: "texto".to_string(),
            keywords: vec!["   ".into()],
            keyword_matching: None,
        });
        assert!(server.count_keywords(params).is_err());
    }

    #[test]
    fn list_excluded_words_tool_filters_by_class() {
        let server = ContadorServer::new();
        let params = Parameters(ListExcludedWordsParams {
            class: Some(WordClass::Conjunctions),
            ..Default::default()
        });

        let result = server
            .list_excluded_words(params)
            .expect("list_excluded_words should succeed");
        let json = extract_json(&result);
        let words = json.as_array().unwrap();
        assert!(words.iter().any(|w| w == "pero"));
        assert!(!words.iter().any(|w| w == "el"));
    }

    #[test]
    fn list_excluded_words_tool_empty_when_nothing_excluded() {
        let server = ContadorServer::new();
        let params = Parameters(ListExcludedWordsParams {
            exclusions: Some(ExclusionConfig::none()),
            ..Default::default()
        });

        let result = server
            .list_excluded_words(params)
            .expect("list_excluded_words should succeed");
        assert!(extract_json(&result).as_array().unwrap().is_empty());
    }
}
