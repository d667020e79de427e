use clap::{Args as ClapArgs, Parser};
use nutripilot_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_SESSION_IDLE_TTL_SECS, LLMConfig,
    NutriPilotConfig, SessionConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutripilot", about = "Food label analysis API backed by Gemini")]
pub struct Args {
    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SessionArgs {
    #[arg(
        long = "session-idle-ttl-secs",
        env = "SESSION_IDLE_TTL_SECS",
        default_value_t = DEFAULT_SESSION_IDLE_TTL_SECS
    )]
    pub idle_ttl_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for NutriPilotConfig {
    fn from(value: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: value.llm.gemini_api_key,
                gemini_model: value.llm.gemini_model,
                gemini_base_url: value.llm.gemini_base_url,
            },
            session: SessionConfig {
                idle_ttl_secs: value.session.idle_ttl_secs,
            },
        }
    }
}
