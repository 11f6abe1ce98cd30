//! Run Turn use case.
//!
//! One full agent turn:
//!
//! ```text
//! ComposePrompt ──▶ AwaitCompletion ──▶ Classify ──┬──▶ Dispatch (tool call)
//!                                                  └──▶ Display  (plain reply)
//! ```
//!
//! Every failure is returned as a [`TurnError`]; the caller reports it and
//! goes back to waiting for input. A failed turn never produces partial output.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::TurnProgressNotifier;
use crate::ports::tool_executor::ToolExecutorPort;
use agentic_domain::prompt::AgentPromptTemplate;
use agentic_domain::tool::{
    call_parser::{CallParseError, ModelReply, classify_reply},
    entities::ToolCall,
    value_objects::ToolError,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that end a turn.
#[derive(Error, Debug)]
pub enum TurnError {
    /// The completion request failed
    #[error("Model request failed: {0}")]
    Service(#[from] GatewayError),

    /// The reply looked like a tool call but could not be parsed
    #[error("Failed to parse tool call: {0}")]
    Parse(#[from] CallParseError),

    /// The reply named a tool that is not registered
    #[error("Tool '{0}' not found.")]
    ToolNotFound(String),

    /// The tool was found but failed while running
    #[error("Tool '{tool_name}' failed: {source}")]
    Invocation {
        tool_name: String,
        #[source]
        source: ToolError,
    },
}

impl TurnError {
    /// Short category label, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            TurnError::Service(_) => "service",
            TurnError::Parse(_) => "parse",
            TurnError::ToolNotFound(_) => "lookup",
            TurnError::Invocation { .. } => "invocation",
        }
    }
}

/// Successful outcome of a turn
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The model answered directly
    Response(String),
    /// The model called a tool; `output` is the tool's return value
    ToolOutput { tool_name: String, output: String },
}

/// Use case for running one agent turn.
pub struct RunTurnUseCase {
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
}

impl Clone for RunTurnUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            tool_executor: self.tool_executor.clone(),
        }
    }
}

impl RunTurnUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, tool_executor: Arc<dyn ToolExecutorPort>) -> Self {
        let tools = tool_executor.tool_spec();
        if tools.is_empty() {
            warn!("No tools registered; every reply will be shown as-is");
        } else {
            debug!(count = tools.len(), "Tools available to the agent");
        }
        Self {
            gateway,
            tool_executor,
        }
    }

    /// Tools available to the agent
    pub fn tool_executor(&self) -> &Arc<dyn ToolExecutorPort> {
        &self.tool_executor
    }

    /// Model the turns are sent to
    pub fn model_name(&self) -> String {
        self.gateway.model().to_string()
    }

    /// Render the prompt sent to the model for `user_input`
    pub fn compose_prompt(&self, user_input: &str) -> String {
        AgentPromptTemplate::compose(self.tool_executor.tool_spec(), user_input)
    }

    /// Execute one turn with progress callbacks.
    pub async fn execute(
        &self,
        user_input: &str,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<TurnOutcome, TurnError> {
        let prompt = self.compose_prompt(user_input);
        debug!(prompt_len = prompt.len(), "Composed prompt");

        progress.on_completion_start();
        let completion = self.gateway.complete(&prompt).await;
        progress.on_completion_end();

        let content = completion.inspect_err(|e| warn!(error = %e, "Completion failed"))?;
        debug!(reply = %content, "Model reply");

        match classify_reply(&content)? {
            ModelReply::Plain(text) => Ok(TurnOutcome::Response(text)),
            ModelReply::ToolCall(call) => self.dispatch(&call, progress),
        }
    }

    fn dispatch(
        &self,
        call: &ToolCall,
        progress: &dyn TurnProgressNotifier,
    ) -> Result<TurnOutcome, TurnError> {
        if !self.tool_executor.has_tool(&call.tool_name) {
            warn!(tool = %call.tool_name, "Model requested an unknown tool");
            return Err(TurnError::ToolNotFound(call.tool_name.clone()));
        }

        info!(call = %call, "Invoking tool");
        progress.on_tool_start(&call.tool_name);

        let output = self
            .tool_executor
            .execute(call)
            .into_result()
            .map_err(|source| TurnError::Invocation {
                tool_name: call.tool_name.clone(),
                source,
            })?;

        Ok(TurnOutcome::ToolOutput {
            tool_name: call.tool_name.clone(),
            output,
        })
    }
}
