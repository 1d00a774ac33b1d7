//! Gemini dispatcher adapter.
//!
//! Wraps the Gemini `generateContent` REST API to implement the
//! [`DispatcherGateway`] and [`DispatcherSession`] ports. The API is
//! stateless, so each session keeps the full conversation history locally
//! and replays it on every call.
//!
//! Function calls in a candidate carry no provider-assigned ID, so the
//! session synthesizes one per call; `send_tool_results` correlates by
//! function *name*, which is what the wire format actually keys on.
//!
//! No retry policy here: a failed request surfaces as a [`GatewayError`]
//! and the use case degrades to its fallback reply.

use async_trait::async_trait;
use clerk_application::ports::dispatcher::{
    DispatcherGateway, DispatcherSession, GatewayError, ToolResultMessage,
};
use clerk_domain::{ContentBlock, DispatcherResponse, StopReason};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable consulted for the API key.
pub const API_KEY_ENV: &str = "GEMINI_API";

/// Gateway for the Gemini `generateContent` API.
pub struct GeminiDispatcher {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiDispatcher {
    /// Create a gateway for `model`.
    ///
    /// The key comes from `api_key` when given, otherwise from the
    /// `GEMINI_API` environment variable.
    pub fn new(model: impl Into<String>, api_key: Option<String>) -> Result<Self, GatewayError> {
        let api_key = api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                GatewayError::MissingCredentials(format!(
                    "set {} or [dispatcher].api_key in the config file",
                    API_KEY_ENV
                ))
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl DispatcherGateway for GeminiDispatcher {
    async fn create_session(
        &self,
        system_prompt: &str,
    ) -> Result<Box<dyn DispatcherSession>, GatewayError> {
        Ok(Box::new(GeminiSession {
            client: self.client.clone(),
            endpoint: self.endpoint(),
            system_prompt: system_prompt.to_string(),
            tools: Mutex::new(Vec::new()),
            history: Mutex::new(Vec::new()),
            call_counter: AtomicU64::new(0),
        }))
    }
}

/// One conversation against the stateless API.
pub struct GeminiSession {
    client: reqwest::Client,
    endpoint: String,
    system_prompt: String,
    /// Function declarations (set when send_with_tools is first called)
    tools: Mutex<Vec<serde_json::Value>>,
    /// Conversation history, replayed on every call
    history: Mutex<Vec<Content>>,
    /// Source of synthesized tool-call IDs
    call_counter: AtomicU64,
}

impl GeminiSession {
    /// Append a user-role content and call the API.
    async fn send_content(&self, content: Content) -> Result<DispatcherResponse, GatewayError> {
        let mut history = self.history.lock().await;
        history.push(content);

        let tools = self.tools.lock().await;
        let contents: &[Content] = &history;
        let request = GenerateRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part::text(&self.system_prompt)],
            },
            contents,
            tools: if tools.is_empty() {
                Vec::new()
            } else {
                vec![ToolDeclarations {
                    function_declarations: tools.clone(),
                }]
            },
        };

        debug!(
            endpoint = %self.endpoint.split('?').next().unwrap_or(""),
            contents = history.len(),
            "Calling generateContent"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status,
                clerk_domain::truncate_str(&body, 300)
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Invalid response body: {}", e)))?;

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::RequestFailed("No candidates in response".to_string()))?;

        let content = candidate.content.unwrap_or_default();

        // Replay the model turn on the next call
        history.push(content.clone());

        Ok(convert_content(content, &self.call_counter))
    }
}

#[async_trait]
impl DispatcherSession for GeminiSession {
    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<DispatcherResponse, GatewayError> {
        {
            let mut registered = self.tools.lock().await;
            if registered.is_empty() {
                *registered = tools.to_vec();
            }
        }

        self.send_content(Content {
            role: "user".to_string(),
            parts: vec![Part::text(content)],
        })
        .await
    }

    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<DispatcherResponse, GatewayError> {
        let parts = results
            .iter()
            .map(|r| {
                let response = if r.is_error {
                    serde_json::json!({ "error": r.output })
                } else {
                    serde_json::json!({ "result": r.output })
                };
                Part::function_response(&r.tool_name, response)
            })
            .collect();

        self.send_content(Content {
            role: "user".to_string(),
            parts,
        })
        .await
    }
}

/// Convert a candidate content into the port-level response type.
fn convert_content(content: Content, call_counter: &AtomicU64) -> DispatcherResponse {
    let mut blocks = Vec::new();
    let mut has_calls = false;

    for part in content.parts {
        if let Some(text) = part.text {
            blocks.push(ContentBlock::Text(text));
        }
        if let Some(call) = part.function_call {
            has_calls = true;
            let n = call_counter.fetch_add(1, Ordering::Relaxed);
            blocks.push(ContentBlock::ToolUse {
                id: format!("{}-{}", call.name, n),
                name: call.name,
                input: call.args,
            });
        }
    }

    let stop_reason = if has_calls {
        Some(StopReason::ToolUse)
    } else {
        Some(StopReason::EndTurn)
    };

    DispatcherResponse {
        content: blocks,
        stop_reason,
    }
}

// --- Wire format ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "functionCall", skip_serializing_if = "Option::is_none")]
    function_call: Option<FunctionCall>,
    #[serde(rename = "functionResponse", skip_serializing_if = "Option::is_none")]
    function_response: Option<FunctionResponse>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            function_call: None,
            function_response: None,
        }
    }

    fn function_response(name: impl Into<String>, response: serde_json::Value) -> Self {
        Self {
            text: None,
            function_call: None,
            function_response: Some(FunctionResponse {
                name: name.into(),
                response,
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FunctionCall {
    name: String,
    #[serde(default)]
    args: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FunctionResponse {
    name: String,
    response: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct ToolDeclarations {
    #[serde(rename = "functionDeclarations")]
    function_declarations: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    #[serde(rename = "systemInstruction")]
    system_instruction: SystemInstruction,
    contents: &'a [Content],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<ToolDeclarations>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
    #[serde(rename = "finishReason")]
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_api_key_is_accepted() {
        let gateway = GeminiDispatcher::new("gemini-2.5-flash", Some("test-key".to_string()));
        assert!(gateway.is_ok());
    }

    #[test]
    fn text_candidate_converts_to_end_turn() {
        let content: Content = serde_json::from_str(
            r#"{"role": "model", "parts": [{"text": "We close at 9pm."}]}"#,
        )
        .unwrap();

        let response = convert_content(content, &AtomicU64::new(0));
        assert_eq!(response.text_content(), "We close at 9pm.");
        assert!(!response.has_tool_calls());
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
    }

    #[test]
    fn function_call_candidate_converts_to_tool_use() {
        let content: Content = serde_json::from_str(
            r#"{
                "role": "model",
                "parts": [
                    {"functionCall": {"name": "check_order", "args": {"order_id": "1042"}}}
                ]
            }"#,
        )
        .unwrap();

        let response = convert_content(content, &AtomicU64::new(0));
        assert_eq!(response.stop_reason, Some(StopReason::ToolUse));

        let calls = response.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tool_name, "check_order");
        assert_eq!(calls[0].get_string("order_id"), Some("1042"));
        // Synthesized ID keeps the loop's result correlation working
        assert_eq!(calls[0].native_id.as_deref(), Some("check_order-0"));
    }

    #[test]
    fn synthesized_ids_are_unique_per_session() {
        let counter = AtomicU64::new(0);
        let content = || Content {
            role: "model".to_string(),
            parts: vec![Part {
                text: None,
                function_call: Some(FunctionCall {
                    name: "search_products".to_string(),
                    args: HashMap::new(),
                }),
                function_response: None,
            }],
        };

        let first = convert_content(content(), &counter);
        let second = convert_content(content(), &counter);
        assert_ne!(
            first.tool_calls()[0].native_id,
            second.tool_calls()[0].native_id
        );
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let contents = vec![Content {
            role: "user".to_string(),
            parts: vec![Part::text("where is order 1042?")],
        }];
        let request = GenerateRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part::text("You are a store assistant.")],
            },
            contents: &contents,
            tools: vec![ToolDeclarations {
                function_declarations: vec![serde_json::json!({"name": "check_order"})],
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("systemInstruction").is_some());
        assert!(json["tools"][0].get("functionDeclarations").is_some());
        assert_eq!(json["contents"][0]["parts"][0]["text"], "where is order 1042?");
        // Empty option fields stay off the wire
        assert!(json["contents"][0]["parts"][0].get("functionCall").is_none());
    }

    #[test]
    fn tool_result_parts_use_function_response() {
        let part = Part::function_response(
            "check_order",
            serde_json::json!({ "result": "Order ID not found." }),
        );
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["functionResponse"]["name"], "check_order");
        assert_eq!(
            json["functionResponse"]["response"]["result"],
            "Order ID not found."
        );
    }
}
