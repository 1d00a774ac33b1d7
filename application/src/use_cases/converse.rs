//! Converse use case.
//!
//! Executes one user turn against the conversational dispatcher: send the
//! text with the registered tool schemas, run the bounded tool loop
//! (execute requested lookups, return their text), and hand back the final
//! spoken-compatible reply.
//!
//! Every failure path converges on [`FALLBACK_REPLY`] — the user always
//! receives *some* speakable text, even on total data or gateway
//! unavailability.

use crate::config::DispatchParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::dispatcher::{
    DispatcherGateway, DispatcherSession, GatewayError, ToolResultMessage,
};
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use clerk_domain::truncate_str;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Spoken reply used when the dispatcher cannot produce one.
pub const FALLBACK_REPLY: &str = "I'm having trouble thinking right now.";

/// System instruction registered with the dispatcher session.
const SYSTEM_PROMPT: &str = "\
You are a professional store assistant.
- Use 'search_products' for inventory/price questions.
- Use 'check_order' for order status updates.
- Use 'get_policy_answer' for general FAQs or store policies.
- Keep answers spoken-word friendly (short, no markdown).
- Be concise and friendly.";

/// Errors that can occur during a conversational turn.
#[derive(Error, Debug)]
pub enum ConverseError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("No response from dispatcher")]
    EmptyResponse,
}

/// Use case for running a conversation with the dispatcher.
///
/// Holds one dispatcher session for its lifetime, so the model keeps
/// conversational context across turns ("what about the second one?").
pub struct ConverseUseCase {
    session: Box<dyn DispatcherSession>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    /// Tool schemas, converted once at session start
    tools: Vec<serde_json::Value>,
    params: DispatchParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ConverseUseCase {
    /// Open a dispatcher session with the store-assistant instructions and
    /// the registered lookup tools.
    pub async fn start(
        gateway: Arc<dyn DispatcherGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
        params: DispatchParams,
    ) -> Result<Self, ConverseError> {
        let session = gateway.create_session(SYSTEM_PROMPT).await?;
        let tools = tool_schema.all_tools_schema(tool_executor.tool_spec());

        debug!("Dispatcher session opened with {} tools", tools.len());

        Ok(Self {
            session,
            tool_executor,
            tools,
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        })
    }

    /// Attach a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Process one user utterance, always returning speakable text.
    ///
    /// Gateway failures and empty responses degrade to [`FALLBACK_REPLY`];
    /// they are logged but never propagated — the conversational loop must
    /// outlive any single bad turn.
    pub async fn send(&self, text: &str) -> String {
        self.conversation_logger.log(ConversationEvent::new(
            "user_turn",
            serde_json::json!({ "text": text }),
        ));

        let reply = match self.dispatch(text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Dispatch failed: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };

        self.conversation_logger.log(ConversationEvent::new(
            "reply",
            serde_json::json!({ "text": reply }),
        ));

        reply
    }

    /// Run the bounded dispatch loop for one turn.
    async fn dispatch(&self, text: &str) -> Result<String, ConverseError> {
        info!("Dispatching: {}", truncate_str(text, 100));

        let mut response = self.session.send_with_tools(text, &self.tools).await?;

        let mut last_text = response.text_content();
        let max_turns = self.params.max_tool_turns;
        let mut turn_count = 0;

        loop {
            let tool_calls = response.tool_calls();
            if tool_calls.is_empty() {
                break;
            }

            turn_count += 1;
            if turn_count > max_turns {
                warn!("Tool loop exceeded max_tool_turns ({})", max_turns);
                break;
            }

            // Lookup tools are pure reads over immutable snapshots, so a
            // multi-tool request can execute concurrently
            let futures: Vec<_> = tool_calls
                .iter()
                .map(|call| self.tool_executor.execute(call))
                .collect();
            let results = futures::future::join_all(futures).await;

            let mut tool_result_messages = Vec::new();
            for (call, result) in tool_calls.iter().zip(results) {
                let is_error = !result.is_success();
                let output = if is_error {
                    result
                        .error()
                        .map(|e| e.message.clone())
                        .unwrap_or_else(|| "Unknown error".to_string())
                } else {
                    result.output().unwrap_or("").to_string()
                };

                self.conversation_logger.log(ConversationEvent::new(
                    "tool_call",
                    serde_json::json!({
                        "tool": call.tool_name,
                        "arguments": call.arguments,
                        "is_error": is_error,
                        "output_preview": truncate_str(&output, 200),
                    }),
                ));

                match call.native_id.clone() {
                    Some(native_id) => tool_result_messages.push(ToolResultMessage {
                        tool_use_id: native_id,
                        tool_name: call.tool_name.clone(),
                        output,
                        is_error,
                    }),
                    None => warn!(
                        "Missing native_id for tool call '{}'; skipping result.",
                        call.tool_name
                    ),
                }
            }

            debug!(
                "Tool turn {}/{}: sending {} tool results",
                turn_count,
                max_turns,
                tool_result_messages.len()
            );

            response = self.session.send_tool_results(&tool_result_messages).await?;

            let text = response.text_content();
            if !text.is_empty() {
                last_text = text;
            }
        }

        if last_text.is_empty() {
            return Err(ConverseError::EmptyResponse);
        }

        // Strip markdown emphasis the TTS stage would read aloud
        Ok(last_text.replace('*', ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use clerk_domain::{
        ContentBlock, DispatcherResponse, StopReason, ToolCall, ToolDefinition, ToolResult,
        ToolSpec,
    };
    use std::sync::Mutex;

    /// Session that replays a scripted sequence of responses.
    struct ScriptedSession {
        responses: Mutex<Vec<DispatcherResponse>>,
    }

    impl ScriptedSession {
        fn new(responses: Vec<DispatcherResponse>) -> Self {
            Self {
                responses: Mutex::new(responses),
            }
        }

        fn next(&self) -> Result<DispatcherResponse, GatewayError> {
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                Err(GatewayError::RequestFailed("script exhausted".into()))
            } else {
                Ok(responses.remove(0))
            }
        }
    }

    #[async_trait]
    impl DispatcherSession for ScriptedSession {
        async fn send_with_tools(
            &self,
            _content: &str,
            _tools: &[serde_json::Value],
        ) -> Result<DispatcherResponse, GatewayError> {
            self.next()
        }

        async fn send_tool_results(
            &self,
            results: &[ToolResultMessage],
        ) -> Result<DispatcherResponse, GatewayError> {
            // The executor's payload must round-trip into the results
            assert!(results.iter().all(|r| !r.tool_use_id.is_empty()));
            self.next()
        }
    }

    struct ScriptedGateway {
        responses: Mutex<Option<Vec<DispatcherResponse>>>,
    }

    impl ScriptedGateway {
        fn new(responses: Vec<DispatcherResponse>) -> Self {
            Self {
                responses: Mutex::new(Some(responses)),
            }
        }
    }

    #[async_trait]
    impl DispatcherGateway for ScriptedGateway {
        async fn create_session(
            &self,
            _system_prompt: &str,
        ) -> Result<Box<dyn DispatcherSession>, GatewayError> {
            let responses = self.responses.lock().unwrap().take().unwrap_or_default();
            Ok(Box::new(ScriptedSession::new(responses)))
        }
    }

    /// Executor that answers every call with a fixed payload.
    struct FixedExecutor {
        spec: ToolSpec,
        payload: String,
    }

    impl FixedExecutor {
        fn new(payload: &str) -> Self {
            Self {
                spec: ToolSpec::new().register(
                    ToolDefinition::new("check_order", "Order status")
                        .with_string_arg("order_id", "The order ID"),
                ),
                payload: payload.to_string(),
            }
        }
    }

    #[async_trait]
    impl ToolExecutorPort for FixedExecutor {
        fn tool_spec(&self) -> &ToolSpec {
            &self.spec
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            ToolResult::success(&call.tool_name, &self.payload)
        }

        fn execute_sync(&self, call: &ToolCall) -> ToolResult {
            ToolResult::success(&call.tool_name, &self.payload)
        }
    }

    struct PassthroughSchema;

    impl ToolSchemaPort for PassthroughSchema {
        fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
            serde_json::json!({ "name": tool.name })
        }

        fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
            spec.all().map(|t| self.tool_to_schema(t)).collect()
        }
    }

    fn tool_use_response(id: &str) -> DispatcherResponse {
        DispatcherResponse {
            content: vec![ContentBlock::ToolUse {
                id: id.to_string(),
                name: "check_order".to_string(),
                input: [("order_id".to_string(), serde_json::json!("1042"))]
                    .into_iter()
                    .collect(),
            }],
            stop_reason: Some(StopReason::ToolUse),
        }
    }

    async fn start_use_case(responses: Vec<DispatcherResponse>) -> ConverseUseCase {
        ConverseUseCase::start(
            Arc::new(ScriptedGateway::new(responses)),
            Arc::new(FixedExecutor::new(r#"{"order_id": "ORD-1042"}"#)),
            Arc::new(PassthroughSchema),
            DispatchParams::default(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn text_only_reply_passes_through() {
        let use_case =
            start_use_case(vec![DispatcherResponse::from_text("We close at 9pm.")]).await;
        assert_eq!(use_case.send("when do you close?").await, "We close at 9pm.");
    }

    #[tokio::test]
    async fn markdown_emphasis_is_stripped_for_tts() {
        let use_case =
            start_use_case(vec![DispatcherResponse::from_text("It costs **$349.99**.")]).await;
        assert_eq!(use_case.send("price?").await, "It costs $349.99.");
    }

    #[tokio::test]
    async fn tool_loop_executes_and_returns_final_text() {
        let use_case = start_use_case(vec![
            tool_use_response("call_1"),
            DispatcherResponse::from_text("Your order shipped yesterday."),
        ])
        .await;

        assert_eq!(
            use_case.send("where is order 1042?").await,
            "Your order shipped yesterday."
        );
    }

    #[tokio::test]
    async fn gateway_failure_degrades_to_fallback_reply() {
        // Empty script: the first send fails
        let use_case = start_use_case(vec![]).await;
        assert_eq!(use_case.send("hello?").await, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn runaway_tool_loop_is_bounded() {
        // A model that demands tools forever; text arrives alongside the
        // second demand so the loop has something to return when cut off
        let mut responses = vec![tool_use_response("call_1")];
        responses.push(DispatcherResponse {
            content: vec![
                ContentBlock::Text("Checking again...".to_string()),
                ContentBlock::ToolUse {
                    id: "call_2".to_string(),
                    name: "check_order".to_string(),
                    input: [("order_id".to_string(), serde_json::json!("1042"))]
                        .into_iter()
                        .collect(),
                },
            ],
            stop_reason: Some(StopReason::ToolUse),
        });
        // Enough repeats to exceed the bound
        for i in 3..20 {
            responses.push(tool_use_response(&format!("call_{}", i)));
        }

        let use_case = ConverseUseCase::start(
            Arc::new(ScriptedGateway::new(responses)),
            Arc::new(FixedExecutor::new("{}")),
            Arc::new(PassthroughSchema),
            DispatchParams::default().with_max_tool_turns(3),
        )
        .await
        .unwrap();

        assert_eq!(use_case.send("order status").await, "Checking again...");
    }
}
