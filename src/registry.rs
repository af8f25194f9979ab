//! Explicit tool registration.
//!
//! Tools are added with [`ToolRegistry::register`] before the server starts;
//! the MCP service only reads the registry.

use crate::error::{ThinkError, ThinkResult};
use crate::models::{ThinkParams, THINK_TOOL_DESCRIPTION, THINK_TOOL_NAME};
use crate::recorder::ThoughtRecorder;
use rmcp::model::{JsonObject, Tool};
use std::sync::Arc;

/// Tool handler: raw JSON arguments in, text result out
pub type ToolHandler = Arc<dyn Fn(JsonObject) -> ThinkResult<String> + Send + Sync>;

struct RegisteredTool {
    descriptor: Tool,
    handler: ToolHandler,
}

/// Ordered table of tools exposed by the server
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. A second registration under the same name replaces the first.
    pub fn register(
        &mut self,
        name: &str,
        handler: ToolHandler,
        description: &str,
        schema: JsonObject,
    ) -> &mut Self {
        let descriptor = Tool::new(name.to_string(), description.to_string(), Arc::new(schema));
        let entry = RegisteredTool { descriptor, handler };

        match self.tools.iter_mut().find(|t| t.descriptor.name == name) {
            Some(existing) => {
                tracing::warn!("Tool '{}' registered twice, replacing earlier handler", name);
                *existing = entry;
            }
            None => {
                tracing::debug!("Registered tool '{}'", name);
                self.tools.push(entry);
            }
        }
        self
    }

    /// Tool descriptors in registration order
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|t| t.descriptor.clone()).collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.descriptor.name.to_string()).collect()
    }

    /// Dispatch a call to the named tool
    pub fn call(&self, name: &str, arguments: JsonObject) -> ThinkResult<String> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.descriptor.name == name)
            .ok_or_else(|| ThinkError::UnknownTool { name: name.to_string() })?;
        (tool.handler)(arguments)
    }
}

/// JSON Schema object for the think tool arguments
pub fn think_schema() -> ThinkResult<JsonObject> {
    let schema = serde_json::to_value(schemars::schema_for!(ThinkParams))?;
    Ok(serde_json::from_value(schema)?)
}

/// Register the `think` tool backed by `recorder`
pub fn register_think_tool(registry: &mut ToolRegistry, recorder: ThoughtRecorder) -> ThinkResult<()> {
    let handler: ToolHandler = Arc::new(move |arguments: JsonObject| {
        let params: ThinkParams = serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ThinkError::InvalidArguments { reason: e.to_string() })?;
        recorder.record(&params.thought).map(str::to_string)
    });

    registry.register(THINK_TOOL_NAME, handler, THINK_TOOL_DESCRIPTION, think_schema()?);
    Ok(())
}
