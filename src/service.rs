use crate::config::ThinkMcpConfig;
use crate::error::ThinkResult;
use crate::recorder::ThoughtRecorder;
use crate::registry::{register_think_tool, ToolRegistry};
use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorData, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    RoleServer, ServerHandler,
};
use std::sync::Arc;

/// The think MCP service
#[derive(Clone)]
pub struct ThinkMcpService {
    registry: Arc<ToolRegistry>,
    config: ThinkMcpConfig,
}

impl ThinkMcpService {
    /// Create a service over an already populated registry
    pub fn new(config: ThinkMcpConfig, registry: ToolRegistry) -> Self {
        tracing::info!(
            "Initializing {} with tools: {}",
            config.server.name,
            registry.names().join(", ")
        );
        Self {
            registry: Arc::new(registry),
            config,
        }
    }

    /// Service exposing the `think` tool backed by `recorder`
    pub fn with_recorder(config: ThinkMcpConfig, recorder: ThoughtRecorder) -> ThinkResult<Self> {
        let mut registry = ToolRegistry::new();
        register_think_tool(&mut registry, recorder)?;
        Ok(Self::new(config, registry))
    }

    /// Get reference to the tool registry
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

impl ServerHandler for ThinkMcpService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: rmcp::model::ProtocolVersion::V_2024_11_05,
            server_info: rmcp::model::Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
            },
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            instructions: Some(self.config.server.instructions.clone()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.registry.tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        tracing::debug!("Calling tool '{}'", request.name);

        match self.registry.call(&request.name, request.arguments.unwrap_or_default()) {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => {
                tracing::error!("{} error: {}", request.name, e);
                Err(ErrorData::from(e))
            }
        }
    }
}
