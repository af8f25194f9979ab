use crate::error::{ThinkError, ThinkResult};
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// think-mcp service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThinkMcpConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server identity reported to MCP clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server name/identifier
    pub name: String,
    /// Server version
    pub version: String,
    /// Instructions sent to clients during initialization
    pub instructions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive, overridden by RUST_LOG
    pub filter: String,
}

const DEFAULT_NAME: &str = "Q-Think MCP Server";
const DEFAULT_INSTRUCTIONS: &str =
    "Call the think tool to append a thought to the server log. It never fetches or stores data.";

impl Default for ThinkMcpConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl ThinkMcpConfig {
    /// Load configuration from defaults, a TOML file and THINK_MCP_* variables.
    ///
    /// A file named by THINK_MCP_CONFIG must exist; `think-mcp.toml` is optional.
    pub fn load() -> ThinkResult<Self> {
        let builder = match std::env::var("THINK_MCP_CONFIG") {
            Ok(config_file) => {
                tracing::info!("Using THINK_MCP_CONFIG: {}", config_file);
                Self::defaults()?.add_source(File::from(Path::new(&config_file)).required(true))
            }
            Err(_) => Self::defaults()?.add_source(File::with_name("think-mcp.toml").required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix("THINK_MCP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from defaults overlaid with a single file
    pub fn load_from(path: &Path) -> ThinkResult<Self> {
        let config = Self::defaults()?
            .add_source(File::from(path).required(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn defaults() -> ThinkResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("server.name", DEFAULT_NAME)?
            .set_default("server.version", env!("CARGO_PKG_VERSION"))?
            .set_default("server.instructions", DEFAULT_INSTRUCTIONS)?
            .set_default("logging.filter", "info")?)
    }

    /// Validate configuration
    pub fn validate(&self) -> ThinkResult<()> {
        if self.server.name.trim().is_empty() {
            return Err(ThinkError::Config(config::ConfigError::Message(
                "server.name must not be empty".to_string(),
            )));
        }
        Ok(())
    }
}
