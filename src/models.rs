use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name under which the recorder is exposed to MCP clients
pub const THINK_TOOL_NAME: &str = "think";

pub const THINK_TOOL_DESCRIPTION: &str = "Use the tool to think about something. \
It will not obtain new information or change the database, but just append the thought to the log. \
Use it when complex reasoning or some cache memory is needed.";

/// Parameters for the think tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ThinkParams {
    #[schemars(description = "A thought to think about.")]
    pub thought: String,
}
